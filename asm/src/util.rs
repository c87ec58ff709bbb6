use arch::inst::Inst;
use color_print::cprintln;

use crate::parser::{Line, Stmt};
use crate::symbols::Symbols;

/// Prints the assembly listing (address, word, source) followed by the final
/// symbol table.
pub fn print_dump(lines: &[Line], words: &[u16], symbols: &Symbols) {
    let mut at = 0;
    for line in lines {
        match &line.stmt {
            Some(Stmt::Label(name)) => {
                cprintln!("     |                  | {:>4}: <green>({})</>", line.no(), name);
            }
            Some(_) => {
                let word = words[at];
                let text = match Inst::from_bin(word) {
                    Ok(inst) => inst.cformat(),
                    Err(_) => String::new(),
                };
                cprintln!(
                    "<green>{:04X}</> | {:016b} | {:>4}: {}",
                    at,
                    word,
                    line.no(),
                    text
                );
                at += 1;
            }
            None => {
                println!("     |                  | {:>4}:", line.no());
            }
        }
    }
    println!();
    cprintln!("<bold>Symbols</>");
    for (name, addr) in symbols.iter() {
        cprintln!("  <green>{:04X}</> {}", addr, name);
    }
}
