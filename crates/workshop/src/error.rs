//! Decode error for the serial form of a [`Record`](crate::Record).

use serde_json::error::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    /// The input stopped in the middle of a value.
    #[error("unexpected end of serial form at line {line}, column {column}")]
    UnexpectedEnd { line: usize, column: usize },
    /// Anything else that is not a well-formed value: bad tokens, trailing
    /// characters, numbers outside the finite `f64` range.
    #[error("malformed serial form: {source}")]
    Syntax {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl ParseError {
    /// 1-based position reported by the decoder.
    pub fn position(&self) -> (usize, usize) {
        match self {
            Self::UnexpectedEnd { line, column } | Self::Syntax { line, column, .. } => {
                (*line, *column)
            }
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        let (line, column) = (err.line(), err.column());
        match err.classify() {
            Category::Eof => Self::UnexpectedEnd { line, column },
            Category::Io | Category::Syntax | Category::Data => Self::Syntax {
                line,
                column,
                source: err,
            },
        }
    }
}
