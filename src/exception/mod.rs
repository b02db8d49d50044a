mod exception;
mod record;

pub use exception::*;
pub use record::*;
