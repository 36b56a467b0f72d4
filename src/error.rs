use std::path::PathBuf;

use failure::Fail;

/// Everything that can stop a run before the report is written.
///
/// None of these are recoverable: the binary prints the diagnostic and exits.
#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "input resource {:?} not found", path)]
    ResourceNotFound {
        path: PathBuf,
        #[cause]
        cause: std::io::Error,
    },

    #[fail(display = "line {}: {:?}: {}", line, content, reason)]
    Parse {
        line: usize,
        content: String,
        reason: ParseFailure,
    },

    #[fail(display = "insufficient input: {} points required, {} available", required, available)]
    InsufficientInput {
        required: usize,
        available: usize,
    },

    #[fail(display = "invalid value {:?} for {}", value, key)]
    Config {
        key: &'static str,
        value: String,
    },

    #[fail(display = "failed to write the report")]
    Output(#[cause] std::io::Error),
}

impl Error {
    /// The message of this error followed by the message of every cause,
    /// outermost first.
    pub fn chain(&self) -> Vec<String> {
        let fail: &dyn Fail = self;
        fail.iter_chain().map(|cause| cause.to_string()).collect()
    }
}

/// Why a single line could not be read as a point.
#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum ParseFailure {
    #[fail(display = "expected 2 comma separated values, found {}", _0)]
    TokenCount(usize),

    #[fail(display = "{:?} is not a finite number", _0)]
    InvalidNumber(String),
}
