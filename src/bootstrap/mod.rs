pub mod config;
pub mod logging;
pub mod wiring;

pub use config::{load_optional_config, HostConfig, HostPaths};
pub use logging::init_tracing_subscriber;
pub use wiring::{wire_dependencies, wire_with_clipboard, WiringOptions};
