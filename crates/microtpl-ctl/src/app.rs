//! Top-level application state: vault location and the loaded settings.
//!
//! Settings are loaded once at startup and written back explicitly whenever a
//! command changes them.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use microtpl_core::picker::SuggestPrompt;
use microtpl_core::settings::{Settings, SettingsStore};
use microtpl_core::template_engine::TemplateRenderer;
use microtpl_core::vault::{TemplateFile, Vault};

use crate::error::CtlResult;
use crate::prompt;

#[derive(Debug)]
pub(crate) struct App {
    vault_root: PathBuf,
    store: SettingsStore,
    settings: Settings,
}

impl App {
    pub(crate) fn load(vault_root: PathBuf, store: SettingsStore) -> CtlResult<Self> {
        let settings = store.load()?;
        tracing::debug!(vault = ?vault_root, settings = ?store.path(), "Loaded app state");
        Ok(Self {
            vault_root,
            store,
            settings,
        })
    }

    pub(crate) fn vault(&self) -> CtlResult<Vault> {
        Ok(Vault::open(&self.vault_root)?)
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.settings
    }

    pub(crate) fn settings_path(&self) -> &Path {
        self.store.path()
    }

    /// Apply `change` to the settings and persist them.
    pub(crate) fn update_settings(&mut self, change: impl FnOnce(&mut Settings)) -> CtlResult<()> {
        change(&mut self.settings);
        self.store.save(&self.settings)?;
        Ok(())
    }

    /// Templates in the configured folder.
    pub(crate) fn templates(&self, vault: &Vault) -> CtlResult<Vec<TemplateFile>> {
        Ok(vault.templates_in(&self.settings.templates_dir)?)
    }

    /// Resolve `name` in the templates folder, or ask for one when `name` is `None`.
    pub(crate) fn select_template(
        &self,
        vault: &Vault,
        name: Option<&str>,
        input: &mut impl BufRead,
    ) -> CtlResult<Option<TemplateFile>> {
        if let Some(name) = name {
            return Ok(Some(vault.find_template(&self.settings.templates_dir, name)?));
        }

        let templates = self.templates(vault)?;
        let picker = SuggestPrompt::from_items("Select template", templates, |t| t.name.clone());
        prompt::run(picker, input, |file| file)
    }

    /// Read and render a template file.
    pub(crate) async fn render(&self, vault: &Vault, file: &TemplateFile) -> CtlResult<String> {
        let source = vault.read(file).await?;
        Ok(TemplateRenderer::new().render(&file.name, &source)?)
    }
}

/// Show the vault root folder as `<root>` rather than an empty string.
pub(crate) fn display_dir(dir: &str) -> &str {
    if dir.is_empty() {
        "<root>"
    } else {
        dir
    }
}
