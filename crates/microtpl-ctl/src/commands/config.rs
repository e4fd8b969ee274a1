//! Settings inspection and manual editing.

use crate::app::{display_dir, App};
use crate::error::CtlResult;
use crate::{output, ConfigCommands};

pub(crate) async fn handle_config_command(cmd: ConfigCommands, app: &mut App) -> CtlResult<()> {
    match cmd {
        ConfigCommands::Show => {
            show(app);
            Ok(())
        }
        ConfigCommands::SetDir { dir } => {
            app.update_settings(|settings| settings.set_templates_dir(&dir))?;
            output::success(format!(
                "Templates folder set to '{}'",
                display_dir(&app.settings().templates_dir)
            ));
            Ok(())
        }
    }
}

fn show(app: &App) {
    let settings = app.settings();
    output::header("Settings");
    output::label("File", app.settings_path().display());
    output::label("Templates folder", display_dir(&settings.templates_dir));
    output::label("Marker column", settings.marker_column);
}
