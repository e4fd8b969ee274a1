//! Tera-backed renderer for single template files.

use std::sync::Arc;

use tera::{Context, Tera};

use super::clock::{Clock, DateHelper, SystemClock};
use super::filters;
use crate::error::RenderError;

/// Renders template source text against the date context.
#[derive(Debug)]
pub struct TemplateRenderer {
    tera: Tera,
    clock: Arc<dyn Clock>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Renderer using wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Renderer using the given clock for `d()` and `now`.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(clock);

        let mut tera = Tera::default();
        // Notes are not HTML; never escape, whatever the file extension.
        tera.autoescape_on(Vec::new());
        filters::register(&mut tera);
        tera.register_function("d", DateHelper::new(Arc::clone(&clock)));

        Self { tera, clock }
    }

    /// Render `source`. `name` identifies the template in error messages.
    pub fn render(&self, name: &str, source: &str) -> Result<String, RenderError> {
        // Clone so each render starts from the registered filters and functions only.
        let mut tera = self.tera.clone();
        tera.add_raw_template(name, source)
            .map_err(|source| RenderError::Parse {
                template: name.to_string(),
                source,
            })?;

        let rendered = tera
            .render(name, &self.context())
            .map_err(|source| RenderError::Render {
                template: name.to_string(),
                source,
            })?;

        tracing::debug!(template = name, bytes = rendered.len(), "Rendered template");
        Ok(rendered)
    }

    fn context(&self) -> Context {
        let mut context = Context::new();
        context.insert("now", &self.clock.now().to_rfc3339());
        context
    }
}
