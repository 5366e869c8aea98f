use crate::language::span::Span;
use miette::SourceSpan;

/// One lex or parse failure, positioned in the source text.
///
/// The parser recovers and keeps going after reporting one of these, so a
/// pass over malformed input usually ends with several bundled into a
/// [`SyntaxErrors`].
#[derive(Clone, Debug)]
pub struct SyntaxError {
    pub message: String,
    pub span: Span,
    pub help: Option<String>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// This error's location as miette wants it, for diagnostic rendering.
    pub fn source_span(&self) -> SourceSpan {
        (self.span.start, self.span.len()).into()
    }
}

/// Everything that went wrong in a single pass over one source string.
/// Only `parse_program` builds these; `is_empty` never holds for a value
/// it returns.
#[derive(Clone, Debug)]
pub struct SyntaxErrors {
    pub errors: Vec<SyntaxError>,
}

impl SyntaxErrors {
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<Vec<SyntaxError>> for SyntaxErrors {
    fn from(errors: Vec<SyntaxError>) -> Self {
        Self { errors }
    }
}
