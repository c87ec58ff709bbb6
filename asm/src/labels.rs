use crate::parser::{Line, Stmt};
use crate::symbols::Symbols;

/// First pass: bind every label to the address of the next real instruction.
///
/// Labels never advance the counter and duplicates keep their first binding,
/// so the pass cannot fail; unknown operands are left for the second pass.
pub fn collect_labels(lines: &[Line], symbols: &mut Symbols) {
    let mut pc: u16 = 0;
    for line in lines {
        match &line.stmt {
            Some(Stmt::Label(name)) => symbols.bind(name, pc),
            Some(Stmt::A(_)) | Some(Stmt::C { .. }) => pc += 1,
            None => {}
        }
    }
}
