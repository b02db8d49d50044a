use std::fmt::*;

#[derive(Clone, Eq, PartialEq)]
pub struct Location {
    file: Option<String>,
    line: u32,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: Some(file.into()),
            line,
        }
    }

    /// Location of the code that called the current `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        let caller = std::panic::Location::caller();
        Self::new(caller.file(), caller.line())
    }

    pub const fn unknown() -> Self {
        Self {
            file: None,
            line: 0,
        }
    }

    pub fn file(&self) -> &str {
        self.file.as_deref().unwrap_or("unknown")
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn is_known(&self) -> bool {
        self.file.is_some()
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}:{}", self.file(), self.line())
    }
}

impl Debug for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(self, f)
    }
}
