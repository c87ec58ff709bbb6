use crate::{comp::Comp, dest::Dest, jump::Jump};

use color_print::cformat;

/// One machine word, after all symbols are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value`: load a 15-bit constant into the address register.
    A(u16),
    /// `dest=comp;jump`: ALU operation with optional store and branch.
    C(Dest, Comp, Jump),
}

impl Inst {
    pub fn to_bin(&self) -> u16 {
        match *self {
            // bit 15 selects the instruction class
            Inst::A(value) => value & 0x7FFF,
            Inst::C(dest, comp, jump) => {
                0b111 << 13 | comp.bits() << 6 | dest.bits() << 3 | jump.bits()
            }
        }
    }

    pub fn from_bin(word: u16) -> Result<Inst, String> {
        if word & 0x8000 == 0 {
            return Ok(Inst::A(word));
        }
        if word >> 13 != 0b111 {
            return Err(format!("Not an instruction word: {:#06X}", word));
        }
        let comp = Comp::from_bits(word >> 6 & 0x7F)
            .ok_or(format!("No comp for bits {:#09b}", word >> 6 & 0x7F))?;
        let dest = Dest::from_bits(word >> 3 & 0b111)
            .ok_or(format!("No dest for bits {:#05b}", word >> 3 & 0b111))?;
        let jump = Jump::from_bits(word & 0b111)
            .ok_or(format!("No jump for bits {:#05b}", word & 0b111))?;
        Ok(Inst::C(dest, comp, jump))
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match *self {
            Inst::A(value) => cformat!("<red>@</><yellow>{}</>", value),
            Inst::C(dest, comp, jump) => {
                let dest = match dest {
                    Dest::Null => String::new(),
                    _ => cformat!("<blue>{}</>=", dest),
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    _ => cformat!(";<green>{}</>", jump),
                };
                format!("{}{}{}", dest, cformat!("<red>{}</>", comp), jump)
            }
        }
    }
}
