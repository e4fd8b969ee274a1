//! Clock sources and the `d(...)` date helper.

use std::collections::HashMap;
use std::fmt::{self, Write as _};
use std::sync::Arc;

use chrono::{DateTime, Local, TimeDelta};
use tera::{Function, Value};

const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of "now" for template rendering.
pub trait Clock: fmt::Debug + Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Tera function behind `{{ d() }}`.
///
/// Arguments (all optional):
/// - `format`: chrono strftime pattern, default `%Y-%m-%d`
/// - `add_days`: signed day offset from now
#[derive(Debug, Clone)]
pub(crate) struct DateHelper {
    clock: Arc<dyn Clock>,
}

impl DateHelper {
    pub(crate) fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Function for DateHelper {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let format = match args.get("format") {
            None => DEFAULT_DATE_FORMAT,
            Some(value) => value
                .as_str()
                .ok_or_else(|| tera::Error::msg("d(): `format` must be a string"))?,
        };

        let mut when = self.clock.now();
        if let Some(value) = args.get("add_days") {
            let days = value
                .as_i64()
                .ok_or_else(|| tera::Error::msg("d(): `add_days` must be an integer"))?;
            when = TimeDelta::try_days(days)
                .and_then(|delta| when.checked_add_signed(delta))
                .ok_or_else(|| tera::Error::msg(format!("d(): add_days={days} is out of range")))?;
        }

        let mut out = String::new();
        write!(out, "{}", when.format(format))
            .map_err(|_| tera::Error::msg(format!("d(): invalid format string '{format}'")))?;
        Ok(Value::String(out))
    }

    fn is_safe(&self) -> bool {
        true
    }
}
