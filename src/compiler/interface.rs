use super::SyntaxError;

/// Trait for template compilers.
pub trait TemplateCompiler {
    /// Compiles template source text into the serialized representation
    /// embedded in the bundle.
    ///
    /// # Arguments
    /// * `source` - Template source, already stripped of a byte order mark
    ///
    /// # Returns
    /// * `Result<String, SyntaxError>` - Source text of an object literal that the
    ///   runtime turns into a template instance
    fn compile(&self, source: &str) -> Result<String, SyntaxError>;
}
