use crate::language::errors::SyntaxError;
use crate::runtime::error::EvalError;
use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct SyntaxDiagnostic {
    #[source_code]
    src: NamedSource,
    #[label("{message}")]
    span: SourceSpan,
    #[help]
    help: Option<String>,
    message: String,
}

impl SyntaxDiagnostic {
    pub fn from_error(src: NamedSource, err: SyntaxError) -> Self {
        Self {
            src,
            span: err.source_span(),
            help: err.help.clone(),
            message: err.message,
        }
    }
}

pub fn emit_syntax_errors(name: &str, source: &str, errors: &[SyntaxError]) {
    for err in errors {
        let src = NamedSource::new(name, source.to_string());
        let diagnostic = SyntaxDiagnostic::from_error(src, err.clone());
        eprintln!("{:?}", Report::new(diagnostic));
    }
}

pub fn report_eval_error(error: &EvalError) {
    eprintln!("ERROR: {}", error);
}

pub fn report_io_error(path: &Path, error: &std::io::Error) {
    eprintln!("Failed to access {}: {}", path.display(), error);
}
