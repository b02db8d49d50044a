pub mod error;
pub mod exception;
pub mod exit;
pub mod handler;
pub mod location;
pub mod template;

pub use error::{Error, Result};
pub use exception::{ErrorRecord, Reportable};
pub use handler::{ExceptionHandler, HandlerConfig, Listener};
