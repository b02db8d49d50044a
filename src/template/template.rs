use std::borrow::Cow;
use std::fmt::*;

pub const DEFAULT_TEMPLATE: &str = "\
======================================================================
   The application has thrown an exception!
======================================================================
 :className
 :message
----------------------------------------------------------------------
:file::line
:stack
----------------------------------------------------------------------
:previous";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Placeholder {
    ClassName,
    Message,
    Code,
    File,
    Line,
    Stack,
    Previous,
}

impl Placeholder {
    pub const ALL: [Placeholder; 7] = [
        Placeholder::ClassName,
        Placeholder::Message,
        Placeholder::Code,
        Placeholder::File,
        Placeholder::Line,
        Placeholder::Stack,
        Placeholder::Previous,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::ClassName => ":className",
            Placeholder::Message => ":message",
            Placeholder::Code => ":code",
            Placeholder::File => ":file",
            Placeholder::Line => ":line",
            Placeholder::Stack => ":stack",
            Placeholder::Previous => ":previous",
        }
    }
}

impl Display for Placeholder {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.token())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Message template split into literal text and placeholders.
///
/// Anything that starts with `:` but is not a known placeholder stays literal.
#[derive(Clone, Debug)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(text: impl Into<String>) -> Self {
        let source = text.into();
        let mut segments = vec![];
        let mut literal_start = 0;
        let mut pos = 0;

        while let Some(offset) = source[pos..].find(':') {
            let colon = pos + offset;
            let rest = &source[colon..];
            match Placeholder::ALL.iter().find(|p| rest.starts_with(p.token())) {
                Some(placeholder) => {
                    if literal_start < colon {
                        segments.push(Segment::Literal(source[literal_start..colon].to_owned()));
                    }
                    segments.push(Segment::Placeholder(*placeholder));
                    pos = colon + placeholder.token().len();
                    literal_start = pos;
                }
                None => pos = colon + 1,
            }
        }
        if literal_start < source.len() {
            segments.push(Segment::Literal(source[literal_start..].to_owned()));
        }

        Self { source, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.segments.contains(&Segment::Placeholder(placeholder))
    }

    pub fn render<'a>(&self, mut value: impl FnMut(Placeholder) -> Cow<'a, str>) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(placeholder) => out.push_str(&value(*placeholder)),
            }
        }
        out
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE)
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.source)
    }
}
