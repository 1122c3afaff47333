use crate::settings::Settings;

/// Why a candidate was not accepted into history.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterRejection {
    #[error("content is empty")]
    Empty,

    #[error("content contains only whitespace")]
    WhitespaceOnly,

    #[error("content has {len} characters, minimum is {min}")]
    TooShort { len: usize, min: usize },
}

/// Capture filter derived from the current settings.
///
/// Both producers run every candidate through the same filter, so the
/// internal copy path and the poller agree on what counts as capturable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureFilter {
    pub ignore_whitespace_only: bool,
    pub minimum_character_count: usize,
}

impl CaptureFilter {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            ignore_whitespace_only: settings.ignore_whitespace_only,
            minimum_character_count: settings.minimum_character_count,
        }
    }

    pub fn check(&self, content: &str) -> Result<(), FilterRejection> {
        if content.is_empty() {
            return Err(FilterRejection::Empty);
        }
        if self.ignore_whitespace_only && content.trim().is_empty() {
            return Err(FilterRejection::WhitespaceOnly);
        }
        let len = content.chars().count();
        if len < self.minimum_character_count {
            return Err(FilterRejection::TooShort {
                len,
                min: self.minimum_character_count,
            });
        }
        Ok(())
    }

    pub fn accepts(&self, content: &str) -> bool {
        self.check(content).is_ok()
    }
}
