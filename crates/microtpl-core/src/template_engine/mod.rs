//! Runtime template rendering for vault templates.
//!
//! Templates are plain files in the configured folder, rendered with Tera.
//! The context exposes a date helper `d(...)`, a `now` timestamp, and case
//! conversion filters. Anything Tera does not recognise as syntax, including
//! the `$cur` marker, passes through unchanged.

mod clock;
mod engine;
mod filters;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::TemplateRenderer;
