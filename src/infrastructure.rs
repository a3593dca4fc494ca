// Infrastructure layer modules
pub mod event_logger;
pub mod logging;

// Re-exports
pub use event_logger::{EventLogger, TracingEventLogger};
pub use logging::init_logging;
