//! Template listing.

use crate::app::{display_dir, App};
use crate::error::CtlResult;
use crate::output;

pub(crate) async fn handle_list_command(app: &App) -> CtlResult<()> {
    let vault = app.vault()?;
    let templates = app.templates(&vault)?;
    let dir = display_dir(&app.settings().templates_dir);

    if templates.is_empty() {
        output::warning(format!("No templates found in '{dir}'."));
        output::blank();
        output::plain("Pick a folder with:");
        output::plain("  microtpl select-dir");
        return Ok(());
    }

    output::header(format!("Templates in '{dir}':"));
    output::blank();
    for template in &templates {
        output::item(&template.name);
    }
    output::blank();
    output::dim(format!("{} template(s)", templates.len()));

    Ok(())
}
