use arch::{comp::Comp, dest::Dest, inst::Inst, jump::Jump};

use crate::error::{Diag, Error};
use crate::parser::{Line, Stmt};
use crate::symbols::Symbols;

/// Highest value an address instruction can load: 15 bits.
const ADDR_MAX: u32 = 0x7FFF;

/// Second pass: resolve operands and encode one word per real instruction.
///
/// The first error aborts the pass, so a returned word list is always the
/// complete program.
pub fn generate(lines: &[Line], symbols: &mut Symbols) -> Result<Vec<u16>, Diag> {
    let mut words = Vec::new();
    for line in lines {
        let stmt = match &line.stmt {
            Some(stmt) => stmt,
            None => continue,
        };
        match encode(stmt, symbols) {
            Ok(Some(inst)) => words.push(inst.to_bin()),
            Ok(None) => {}
            Err(err) => return Err(Diag::at(err, line.clone())),
        }
    }
    Ok(words)
}

fn encode(stmt: &Stmt, symbols: &mut Symbols) -> Result<Option<Inst>, Error> {
    match stmt {
        Stmt::Label(_) => Ok(None),
        Stmt::A(operand) => Ok(Some(Inst::A(resolve(operand, symbols)?))),
        Stmt::C { dest, comp, jump } => {
            let dest = match dest {
                Some(d) => Dest::parse(d).map_err(|_| Error::UnknownDest(d.clone()))?,
                None => Dest::Null,
            };
            if comp.is_empty() {
                return Err(Error::MissingComp);
            }
            let comp = Comp::parse(comp).map_err(|_| Error::UnknownComp(comp.clone()))?;
            let jump = match jump {
                Some(j) => Jump::parse(j).map_err(|_| Error::UnknownJump(j.clone()))?,
                None => Jump::Null,
            };
            Ok(Some(Inst::C(dest, comp, jump)))
        }
    }
}

/// Resolves an address operand: decimal literal, known symbol, or a freshly
/// allocated variable slot. Anything past 15 bits is rejected, wherever the
/// value came from.
fn resolve(operand: &str, symbols: &mut Symbols) -> Result<u16, Error> {
    let value = if !operand.is_empty() && operand.bytes().all(|b| b.is_ascii_digit()) {
        operand
            .parse::<u32>()
            .map_err(|_| Error::AddressOutOfRange(operand.to_string()))?
    } else {
        u32::from(symbols.resolve_or_alloc(operand))
    };
    if value > ADDR_MAX {
        return Err(Error::AddressOutOfRange(operand.to_string()));
    }
    Ok(value as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::collect_labels;
    use crate::parser::parse_lines;

    fn assemble(source: &str) -> Result<Vec<u16>, Diag> {
        let lines = parse_lines("test.asm", source);
        let mut symbols = Symbols::new();
        collect_labels(&lines, &mut symbols);
        generate(&lines, &mut symbols)
    }

    #[test]
    fn numeric_addresses() {
        assert_eq!(assemble("@0\n@2\n@32767\n").unwrap(), vec![0, 2, 0x7FFF]);
    }

    #[test]
    fn predefined_symbols_resolve_without_allocation() {
        let words = assemble("@R0\n@SCREEN\n@KBD\n@first\n").unwrap();
        assert_eq!(words, vec![0, 16384, 24576, 16]);
    }

    #[test]
    fn variables_allocate_in_reference_order() {
        let words = assemble("@b\n@a\n@b\n").unwrap();
        assert_eq!(words, vec![16, 17, 16]);
    }

    #[test]
    fn labels_emit_nothing_and_win_over_allocation() {
        let words = assemble("@LOOP\n(LOOP)\nD=A\n").unwrap();
        assert_eq!(words, vec![1, 0b1110_1100_0001_0000]);
    }

    #[test]
    fn compute_defaults() {
        // no dest and no jump both encode as zero fields
        assert_eq!(assemble("D+A\n").unwrap(), vec![0b1110_0000_1000_0000]);
        // an empty dest before `=` is the null destination
        assert_eq!(assemble("=D+A\n").unwrap(), vec![0b1110_0000_1000_0000]);
    }

    #[test]
    fn unknown_mnemonics_are_reported() {
        assert!(matches!(
            assemble("Q=D\n").unwrap_err().err,
            Error::UnknownDest(d) if d == "Q"
        ));
        assert!(matches!(
            assemble("D=D*A\n").unwrap_err().err,
            Error::UnknownComp(c) if c == "D*A"
        ));
        assert!(matches!(
            assemble("D;JUMP\n").unwrap_err().err,
            Error::UnknownJump(j) if j == "JUMP"
        ));
        // a bare `;` leaves an empty jump fragment, which is not a mnemonic
        assert!(matches!(
            assemble("D;\n").unwrap_err().err,
            Error::UnknownJump(j) if j.is_empty()
        ));
    }

    #[test]
    fn empty_comp_is_malformed() {
        assert!(matches!(assemble("D=\n").unwrap_err().err, Error::MissingComp));
        assert!(matches!(assemble("=;JMP\n").unwrap_err().err, Error::MissingComp));
    }

    #[test]
    fn oversized_addresses_are_rejected() {
        assert!(matches!(
            assemble("@32768\n").unwrap_err().err,
            Error::AddressOutOfRange(v) if v == "32768"
        ));
        // too large even for the parse itself
        assert!(matches!(
            assemble("@99999999999\n").unwrap_err().err,
            Error::AddressOutOfRange(_)
        ));
    }

    #[test]
    fn error_reports_the_source_line() {
        let diag = assemble("@1\nD=D*A\n").unwrap_err();
        let line = diag.line.unwrap();
        assert_eq!(line.no(), 2);
        assert_eq!(line.raw(), "D=D*A");
    }

    #[test]
    fn nothing_is_emitted_after_an_error() {
        assert!(assemble("@1\nBAD=0\n@2\n").is_err());
    }
}
