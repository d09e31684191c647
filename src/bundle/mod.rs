//! Assembly of the bundle text.
//!
//! Statements are collected per section and only turned into text by
//! [`BundleBuilder::render`], which always emits the sections in load order:
//! header, runtime, namespace declarations, raw registrations, callable
//! registrations, export.

pub mod header;
pub mod identifier;
pub mod statement;

use crate::compiler::TemplateCompiler;
use crate::config::{ExportFormat, Layout};
use crate::constants::bundle::{LOCAL, PROTO, RAW};
use crate::error::{Error, Result};
use crate::loader::TemplateSource;
use crate::namespace::parent;
use log::{debug, warn};
use statement::{Statement, Tree};
use std::collections::HashSet;

/// Collects bundle statements and renders them in load order.
pub struct BundleBuilder {
    header: String,
    runtime: String,
    declarations: Vec<Statement>,
    raw: Vec<Statement>,
    callables: Vec<Statement>,
    export: Statement,
    declared: HashSet<String>,
}

impl BundleBuilder {
    pub fn new(header: String, runtime: String, format: ExportFormat, global_name: &str) -> Self {
        Self {
            header,
            runtime,
            declarations: vec![Statement::DeclareRawRoot],
            raw: Vec::new(),
            callables: Vec::new(),
            export: Statement::Export { format, global_name: global_name.to_string() },
            declared: HashSet::new(),
        }
    }

    /// Declares an empty namespace at `path` in both trees.
    ///
    /// The parent namespace must already be declared. Declaring the same
    /// namespace twice has no effect.
    pub fn declare_namespace(&mut self, path: &str) -> Result<()> {
        check_not_reserved(path)?;
        if self.declared.contains(path) {
            return Ok(());
        }
        self.require_parent(path)?;

        debug!("Declaring namespace '{path}'");
        for tree in [Tree::Callable, Tree::Raw] {
            self.declarations.push(Statement::Declare { tree, path: path.to_string() });
        }
        self.declared.insert(path.to_string());
        Ok(())
    }

    /// Registers a compiled template and its callable wrapper at `path`.
    pub fn register(&mut self, path: &str, compiled: String) -> Result<()> {
        check_not_reserved(path)?;
        if self.declared.contains(path) {
            return Err(Error::InvalidTemplatePath {
                path: path.to_string(),
                reason: "a namespace with the same path already exists".to_string(),
            });
        }
        self.require_parent(path)?;

        self.raw.push(Statement::RegisterRaw { path: path.to_string(), compiled });
        self.callables.push(Statement::RegisterCallable { path: path.to_string() });
        Ok(())
    }

    fn require_parent(&self, path: &str) -> Result<()> {
        match parent(path) {
            Some(parent) if !self.declared.contains(parent) => {
                Err(Error::UndeclaredNamespace { path: parent.to_string() })
            }
            _ => Ok(()),
        }
    }

    /// Renders the bundle. The generated statements run inside a closure so
    /// only the export reaches the surrounding scope.
    pub fn render(self) -> String {
        let mut output = self.header;
        output.push_str(&self.runtime);
        if !output.is_empty() && !output.ends_with('\n') {
            output.push('\n');
        }

        output.push_str(&format!(";(function() {{var {LOCAL} = {{}};"));
        for statement in self
            .declarations
            .iter()
            .chain(&self.raw)
            .chain(&self.callables)
            .chain(std::iter::once(&self.export))
        {
            output.push('\n');
            output.push_str(&statement.render());
        }
        output.push_str("\n})();\n");
        output
    }
}

/// The top-level `raw` member holds the raw tree and cannot be a template or namespace.
/// `__proto__` is rejected at any depth since assigning it does not register anything.
fn check_not_reserved(path: &str) -> Result<()> {
    let reason = if path.split('.').next() == Some(RAW) {
        format!("'{RAW}' is reserved for the raw template registry")
    } else if path.split('.').any(|segment| segment == PROTO) {
        format!("'{PROTO}' cannot be used as a template or namespace name")
    } else {
        return Ok(());
    };
    Err(Error::InvalidTemplatePath { path: path.to_string(), reason })
}

/// Turns loaded templates into bundle text.
pub struct Assembler<'a> {
    pub compiler: &'a dyn TemplateCompiler,
    pub layout: Layout,
    pub format: ExportFormat,
    pub global_name: &'a str,
}

impl Assembler<'_> {
    /// Assembles the full bundle for `templates`.
    ///
    /// `prefixes` must list parents before children, as produced by
    /// [`crate::namespace::build_prefixes`] over the template keys. Each
    /// template is compiled in turn; the first failure aborts the assembly.
    pub fn assemble(
        &self,
        templates: &[TemplateSource],
        prefixes: &[String],
        header: String,
        runtime: String,
    ) -> Result<String> {
        let mut builder = BundleBuilder::new(header, runtime, self.format, self.global_name);

        for prefix in prefixes {
            builder.declare_namespace(prefix)?;
        }

        let mut registered = HashSet::new();
        for template in templates {
            let key = template.key(self.layout);
            if !registered.insert(key) {
                warn!(
                    "Template '{key}' is registered more than once; {} wins",
                    template.file.display()
                );
            }

            let compiled =
                self.compiler.compile(&template.content).map_err(|e| Error::CompileError {
                    template: template.file.display().to_string(),
                    reason: e.to_string(),
                })?;
            debug!("Compiled template '{key}'");
            builder.register(key, compiled)?;
        }

        Ok(builder.render())
    }
}
