use super::{codegen, parser, scanner, SyntaxError, TemplateCompiler};

/// Mustache compiler producing code objects for the `Hogan.Template` constructor.
///
/// Supports variables, triple mustaches, `&`, sections, inverted sections,
/// comments, partials and delimiter changes. Template inheritance (`<`, `$`)
/// is rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct HoganCompiler;

impl HoganCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateCompiler for HoganCompiler {
    fn compile(&self, source: &str) -> Result<String, SyntaxError> {
        let tokens = scanner::scan(source)?;
        let nodes = parser::parse(tokens)?;
        Ok(codegen::generate(&nodes))
    }
}
