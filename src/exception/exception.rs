use crate::location::Location;

/// Anything the exception handler can report.
///
/// The causal chain is walked through [`Reportable::previous`] until it returns `None`,
/// newest error first.
pub trait Reportable {
    fn class_name(&self) -> &str;

    fn message(&self) -> &str;

    fn code(&self) -> i64;

    fn location(&self) -> &Location;

    fn stack(&self) -> &str;

    fn previous(&self) -> Option<&dyn Reportable>;
}

#[macro_export]
macro_rules! declare_exception {
    ($name:ident) => {
        #[derive(Debug)]
        pub struct $name($crate::exception::ErrorRecord);

        impl $name {
            #[track_caller]
            pub fn new(message: impl Into<String>, code: i64) -> Self {
                Self($crate::exception::ErrorRecord::new(stringify!($name), message).with_code(code))
            }

            pub fn caused_by(self, previous: impl $crate::exception::Reportable + 'static) -> Self {
                Self(self.0.caused_by(previous))
            }

            pub fn with_stack(self, stack: impl Into<String>) -> Self {
                Self(self.0.with_stack(stack))
            }
        }

        impl $crate::exception::Reportable for $name {
            fn class_name(&self) -> &str {
                self.0.class_name()
            }

            fn message(&self) -> &str {
                self.0.message()
            }

            fn code(&self) -> i64 {
                self.0.code()
            }

            fn location(&self) -> &$crate::location::Location {
                self.0.location()
            }

            fn stack(&self) -> &str {
                self.0.stack()
            }

            fn previous(&self) -> Option<&dyn $crate::exception::Reportable> {
                self.0.previous()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}
