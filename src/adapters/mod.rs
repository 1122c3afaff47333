pub mod terminal;

pub use terminal::{LoggingObserver, PromptConfirmation, StdoutSurface, TerminalNotice};
