use color_print::cprintln;
use thiserror::Error;

use crate::parser::Line;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown `dest` mnemonic: `{0}`")]
    UnknownDest(String),

    #[error("Unknown `comp` mnemonic: `{0}`")]
    UnknownComp(String),

    #[error("Unknown `jump` mnemonic: `{0}`")]
    UnknownJump(String),

    #[error("Compute instruction without a `comp` field")]
    MissingComp,

    #[error("Address `{0}` does not fit in 15 bits")]
    AddressOutOfRange(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

/// An error tied to the source line that produced it. I/O failures carry no
/// line.
#[derive(Debug)]
pub struct Diag {
    pub err: Error,
    pub line: Option<Line>,
}

impl Diag {
    pub fn at(err: Error, line: Line) -> Self {
        Diag {
            err,
            line: Some(line),
        }
    }

    /// Prints the error with the offending source location and line content.
    pub fn print(&self) {
        cprintln!("<red,bold>error</>: {}", self.err);
        if let Some(line) = &self.line {
            cprintln!("     <blue>--></> <underline>{}</>", line.pos());
            cprintln!("      <blue>|</>");
            cprintln!(" <blue>{:>4} |</> {}", line.no(), line.raw());
            cprintln!("      <blue>|</>");
        }
    }
}

impl From<Error> for Diag {
    fn from(err: Error) -> Self {
        Diag { err, line: None }
    }
}
