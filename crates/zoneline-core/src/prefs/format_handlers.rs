//! World-clock date-format operations.

use super::Preferences;
use crate::{
    display::OperationStatus,
    error::Result,
    format::{self, POPOVER_FORMATS},
    params::SetDateFormat,
    store::keys,
};

impl Preferences {
    /// Reads the active world-clock format pattern.
    pub fn date_format(&self) -> Result<String> {
        self.with_store(|store| store.get_or(keys::DATE_FORMAT, keys::DEFAULT_DATE_FORMAT))
    }

    /// Selects a world-clock format pattern. Patterns outside the preset
    /// catalog are rejected without error.
    pub fn set_date_format(&self, params: &SetDateFormat) -> Result<OperationStatus> {
        if !format::catalog_contains(&POPOVER_FORMATS, &params.pattern) {
            return Ok(OperationStatus::rejected(format!(
                "`{}` is not in the format catalog",
                params.pattern
            )));
        }
        self.with_store(|store| {
            store.set(keys::DATE_FORMAT, &params.pattern)?;
            Ok(OperationStatus::applied(format!(
                "Date format set to `{}`",
                params.pattern
            )))
        })
    }
}
