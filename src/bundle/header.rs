use crate::constants::bundle::DEFAULT_HEADER;
use crate::error::Result;
use minijinja::{context, Environment};
use std::path::Path;

/// Values available to a custom header template.
pub struct HeaderContext<'a> {
    pub template_count: usize,
    pub template_dir: &'a Path,
}

/// Renders the comment block at the top of the bundle.
///
/// Without a custom template the built-in banner is used verbatim. A custom
/// template is rendered with MiniJinja and may use `version`,
/// `template_count` and `template_dir`.
pub fn render_header(custom: Option<&str>, header: &HeaderContext<'_>) -> Result<String> {
    let Some(template) = custom else {
        return Ok(DEFAULT_HEADER.to_string());
    };

    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    let mut rendered = env.render_str(
        template,
        context! {
            version => env!("CARGO_PKG_VERSION"),
            template_count => header.template_count,
            template_dir => header.template_dir.display().to_string(),
        },
    )?;

    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
