//! Choose the folder templates are read from.

use microtpl_core::picker::SuggestPrompt;

use crate::app::{display_dir, App};
use crate::error::CtlResult;
use crate::{output, prompt};

pub(crate) async fn handle_select_dir_command(app: &mut App, dir: Option<String>) -> CtlResult<()> {
    let saved = match dir {
        Some(dir) => Some(save_dir(app, &dir)),
        None => {
            let dirs = app.vault()?.source_dirs()?;
            let picker = SuggestPrompt::from_items("Select templates folder", dirs, |d| d.name.clone());
            let mut input = std::io::stdin().lock();
            prompt::run(picker, &mut input, |d| save_dir(app, &d.path))?
        }
    };

    match saved.transpose()? {
        Some(()) => {
            output::success(format!(
                "Templates folder set to '{}'",
                display_dir(&app.settings().templates_dir)
            ));
            output::label("Saved to", app.settings_path().display());
        }
        None => output::warning("No folder selected."),
    }
    Ok(())
}

fn save_dir(app: &mut App, dir: &str) -> CtlResult<()> {
    app.update_settings(|settings| settings.set_templates_dir(dir))
}
