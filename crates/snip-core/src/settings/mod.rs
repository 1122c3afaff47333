//! Engine settings: model, defaults and range validation.

mod defaults;
pub mod model;

pub use model::{RibbonAction, Settings, HISTORY_LIMIT_RANGE, POLLING_INTERVAL_RANGE_MS};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("history limit {0} is outside 1..=5000")]
    HistoryLimitOutOfRange(usize),

    #[error("polling interval {0}ms is outside 100..=10000")]
    PollingIntervalOutOfRange(u64),
}

impl Settings {
    /// Check the numeric fields against their accepted ranges.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !HISTORY_LIMIT_RANGE.contains(&self.history_limit) {
            return Err(SettingsError::HistoryLimitOutOfRange(self.history_limit));
        }
        if !POLLING_INTERVAL_RANGE_MS.contains(&self.polling_interval) {
            return Err(SettingsError::PollingIntervalOutOfRange(
                self.polling_interval,
            ));
        }
        Ok(())
    }

    /// Reset every out-of-range numeric field to its default.
    pub fn repaired(mut self) -> Self {
        let defaults = Settings::default();
        if !HISTORY_LIMIT_RANGE.contains(&self.history_limit) {
            self.history_limit = defaults.history_limit;
        }
        if !POLLING_INTERVAL_RANGE_MS.contains(&self.polling_interval) {
            self.polling_interval = defaults.polling_interval;
        }
        self
    }
}
