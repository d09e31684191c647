use crate::{
    cli::Args,
    config::{Config, Options},
    error::Result,
    hoganizer::Hoganizer,
};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Main CLI runner: resolves the configuration and drives the facade.
pub struct Runner {
    args: Args,
    cwd: PathBuf,
}

impl Runner {
    pub fn new(args: Args, cwd: PathBuf) -> Self {
        Self { args, cwd }
    }

    pub fn run(self, out: &mut dyn Write) -> Result<()> {
        let config = self.load_config()?;
        let mut hoganizer = Hoganizer::new(config);

        if self.args.list {
            for template in hoganizer.templates()? {
                writeln!(out, "{}\t{}", template.path, template.file.display())?;
            }
            return Ok(());
        }

        if self.args.dry_run {
            let bundle = hoganizer.precompile()?;
            out.write_all(bundle.as_bytes())?;
            return Ok(());
        }

        hoganizer.write()?;
        writeln!(
            out,
            "Templates precompiled to {}.",
            hoganizer.config().write_location.display()
        )?;
        Ok(())
    }

    /// File options first, command line flags on top.
    fn load_config(&self) -> Result<Config> {
        let file_options = Options::load(&self.cwd, self.args.config.as_deref())?;
        let options = file_options.merge(self.args.options());
        Config::from_options(options, &self.cwd)
    }
}

/// Main entry point for CLI execution, relative to the process working directory.
pub fn run(args: Args) -> Result<()> {
    let cwd = std::env::current_dir()?;
    run_in(args, &cwd, &mut std::io::stdout().lock())
}

/// Runs the CLI as if started in `cwd`, writing user-facing output to `out`.
pub fn run_in(args: Args, cwd: &Path, out: &mut dyn Write) -> Result<()> {
    Runner::new(args, cwd.to_path_buf()).run(out)
}
