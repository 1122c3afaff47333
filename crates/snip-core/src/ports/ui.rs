//! Presentation-facing ports: refresh signal, notices and confirmations.

use async_trait::async_trait;

/// Receives a signal after every committed history mutation.
pub trait HistoryObserverPort: Send + Sync {
    fn history_changed(&self);
}

/// Short user-visible messages.
pub trait NoticePort: Send + Sync {
    fn notify(&self, message: &str);
}

/// Destructive actions that need the user's consent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmRequest {
    ClearHistory,
}

impl ConfirmRequest {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmRequest::ClearHistory => "Clear clipboard history",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ConfirmRequest::ClearHistory => {
                "Are you sure you want to clear all clipboard history? This action cannot be undone."
            }
        }
    }
}

#[async_trait]
pub trait ConfirmationPort: Send + Sync {
    async fn confirm(&self, request: ConfirmRequest) -> bool;
}
