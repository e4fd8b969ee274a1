//! Render a template to stdout without touching any document.

use crate::app::App;
use crate::error::CtlResult;
use crate::output;

pub(crate) async fn handle_render_command(app: &App, template: &str) -> CtlResult<()> {
    let vault = app.vault()?;
    let file = vault.find_template(&app.settings().templates_dir, template)?;
    let rendered = app.render(&vault, &file).await?;

    output::plain(rendered.trim_end_matches('\n'));
    Ok(())
}
