//! Lines produced by the session for a front end to display

/// How a line should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Section banner such as `--- ADD NEW STUDENT ---`
    Heading,
    Text,
    /// A rendered student record
    Record,
    Success,
    Error,
    /// Horizontal separator
    Rule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub kind: LineKind,
    pub text: String,
}

impl OutputLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        OutputLine {
            kind,
            text: text.into(),
        }
    }
}

/// Accumulates lines for one step of the session
#[derive(Debug, Default)]
pub(crate) struct Output {
    lines: Vec<OutputLine>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(OutputLine::new(kind, text));
    }

    pub fn heading(&mut self, text: impl Into<String>) {
        self.push(LineKind::Heading, text);
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.push(LineKind::Text, text);
    }

    pub fn record(&mut self, text: impl Into<String>) {
        self.push(LineKind::Record, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(LineKind::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(LineKind::Error, text);
    }

    pub fn rule(&mut self, width: usize) {
        self.push(LineKind::Rule, "-".repeat(width));
    }

    pub fn into_lines(self) -> Vec<OutputLine> {
        self.lines
    }
}
