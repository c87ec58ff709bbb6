pub mod codegen;
pub mod error;
pub mod labels;
pub mod parser;
pub mod symbols;
pub mod util;

pub use error::{Diag, Error};
pub use parser::{Line, Stmt};
pub use symbols::Symbols;

/// Assembles Hack source text into machine words, one per real instruction.
///
/// `file` is only used to locate errors in diagnostics.
pub fn assemble(file: &str, source: &str) -> Result<Vec<u16>, Diag> {
    let lines = parser::parse_lines(file, source);
    let mut symbols = Symbols::new();
    labels::collect_labels(&lines, &mut symbols);
    codegen::generate(&lines, &mut symbols)
}
