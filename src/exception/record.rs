use super::Reportable;
use crate::location::Location;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;

/// Owned error record, the general-purpose [`Reportable`].
pub struct ErrorRecord {
    class_name: String,
    message: String,
    code: i64,
    location: Location,
    stack: String,
    previous: Option<Box<dyn Reportable>>,
}

impl ErrorRecord {
    /// Creates a record located at the caller, with a backtrace when `RUST_BACKTRACE` enables one.
    #[track_caller]
    pub fn new(class_name: impl Into<String>, message: impl Into<String>) -> Self {
        let backtrace = Backtrace::capture();
        let stack = match backtrace.status() {
            BacktraceStatus::Captured => backtrace.to_string(),
            _ => String::new(),
        };
        Self {
            class_name: class_name.into(),
            message: message.into(),
            code: 0,
            location: Location::caller(),
            stack,
            previous: None,
        }
    }

    /// Converts a std error and its `source()` chain.
    ///
    /// Only the outermost type is known statically, so sources are reported as `Error`.
    pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
        let record = Self::detached(short_type_name::<E>(), error.to_string());
        match error.source() {
            Some(source) => record.caused_by(Self::from_error(source)),
            None => record,
        }
    }

    fn detached(class_name: &str, message: String) -> Self {
        Self {
            class_name: class_name.to_owned(),
            message,
            code: 0,
            location: Location::unknown(),
            stack: String::new(),
            previous: None,
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = stack.into();
        self
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn caused_by(mut self, previous: impl Reportable + 'static) -> Self {
        self.previous = Some(Box::new(previous));
        self
    }
}

impl Reportable for ErrorRecord {
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> i64 {
        self.code
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn stack(&self) -> &str {
        &self.stack
    }

    fn previous(&self) -> Option<&dyn Reportable> {
        self.previous.as_deref()
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.class_name, self.message)
    }
}

impl fmt::Debug for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorRecord")
            .field("class_name", &self.class_name)
            .field("message", &self.message)
            .field("code", &self.code)
            .field("location", &self.location)
            .field("has_previous", &self.previous.is_some())
            .finish()
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
