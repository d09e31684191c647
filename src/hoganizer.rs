use crate::bundle::header::{render_header, HeaderContext};
use crate::bundle::Assembler;
use crate::compiler::{HoganCompiler, TemplateCompiler};
use crate::config::Config;
use crate::error::Result;
use crate::ioutils::{read_text, write_file};
use crate::loader::{discover_templates, load_templates, TemplateSource};
use crate::namespace::build_prefixes;
use log::info;

/// Precompiles a directory of mustache templates into a single bundle.
///
/// The last bundle is kept in memory: [`Hoganizer::precompile`] and
/// [`Hoganizer::write`] always rebuild it, [`Hoganizer::get_cached`] only
/// builds it when none exists yet.
pub struct Hoganizer {
    config: Config,
    compiler: Box<dyn TemplateCompiler>,
    compiled: Option<String>,
}

impl Hoganizer {
    /// Creates a facade compiling with [`HoganCompiler`].
    pub fn new(config: Config) -> Self {
        Self::with_compiler(config, Box::new(HoganCompiler::new()))
    }

    pub fn with_compiler(config: Config, compiler: Box<dyn TemplateCompiler>) -> Self {
        Self { config, compiler, compiled: None }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Discovers and loads every template without compiling anything.
    pub fn templates(&self) -> Result<Vec<TemplateSource>> {
        let files = discover_templates(&self.config)?;
        load_templates(&files, &self.config)
    }

    /// Rebuilds the bundle from disk and returns it.
    pub fn precompile(&mut self) -> Result<String> {
        let templates = self.templates()?;
        let prefixes =
            build_prefixes(templates.iter().map(|template| template.key(self.config.layout)));
        let runtime = read_text(&self.config.runtime)?;
        let header = render_header(
            self.config.header.as_deref(),
            &HeaderContext {
                template_count: templates.len(),
                template_dir: &self.config.template_dir,
            },
        )?;

        let assembler = Assembler {
            compiler: self.compiler.as_ref(),
            layout: self.config.layout,
            format: self.config.export,
            global_name: &self.config.global_name,
        };
        let bundle = assembler.assemble(&templates, &prefixes, header, runtime)?;

        info!(
            "Precompiled {} templates in {} namespaces from {} ({} layout, {} export)",
            templates.len(),
            prefixes.len(),
            self.config.template_dir.display(),
            self.config.layout,
            self.config.export
        );
        self.compiled = Some(bundle.clone());
        Ok(bundle)
    }

    /// Returns the last bundle, building it first if nothing was compiled yet.
    ///
    /// Changes on disk after the last build are not picked up.
    pub fn get_cached(&mut self) -> Result<&str> {
        if self.compiled.is_none() {
            self.precompile()?;
        }
        Ok(self.compiled.as_deref().unwrap_or_default())
    }

    /// Rebuilds the bundle and writes it to the configured location.
    pub fn write(&mut self) -> Result<()> {
        let bundle = self.precompile()?;
        write_file(&bundle, &self.config.write_location)?;
        info!("Wrote bundle to {}", self.config.write_location.display());
        Ok(())
    }
}
