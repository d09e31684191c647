use super::identifier::access;
use crate::config::ExportFormat;
use crate::constants::bundle::{LOCAL, RAW, TEMPLATE_CONSTRUCTOR};

/// Which of the two parallel namespace trees a statement addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tree {
    /// `templates.<path>`: wrapper functions.
    Callable,
    /// `templates.raw.<path>`: `Hogan.Template` instances.
    Raw,
}

impl Tree {
    fn base(self) -> String {
        match self {
            Tree::Callable => LOCAL.to_string(),
            Tree::Raw => format!("{LOCAL}.{RAW}"),
        }
    }

    /// Expression addressing `path` in this tree.
    pub fn access(self, path: &str) -> String {
        access(&self.base(), path)
    }
}

/// One generated line of the bundle closure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `templates.raw = {};`
    DeclareRawRoot,
    /// An empty namespace object at `path`.
    Declare { tree: Tree, path: String },
    /// A `Hogan.Template` built from the compiled code object.
    RegisterRaw { path: String, compiled: String },
    /// A function rendering the raw template with the given data.
    RegisterCallable { path: String },
    /// Hands the namespace object to the outside world.
    Export { format: ExportFormat, global_name: String },
}

impl Statement {
    pub fn render(&self) -> String {
        match self {
            Statement::DeclareRawRoot => format!("{LOCAL}.{RAW} = {{}};"),
            Statement::Declare { tree, path } => format!("{} = {{}};", tree.access(path)),
            Statement::RegisterRaw { path, compiled } => format!(
                "{} = new {TEMPLATE_CONSTRUCTOR}({compiled});",
                Tree::Raw.access(path)
            ),
            Statement::RegisterCallable { path } => format!(
                "{} = function(data, partials) {{ return {}.render(data, partials); }};",
                Tree::Callable.access(path),
                Tree::Raw.access(path)
            ),
            Statement::Export { format: ExportFormat::Window, global_name } => {
                format!("window.{global_name} = {LOCAL};")
            }
            Statement::Export { format: ExportFormat::CommonJs, .. } => {
                format!("module.exports = {LOCAL};")
            }
        }
    }
}
