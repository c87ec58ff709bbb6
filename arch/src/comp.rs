use bimap::BiMap;
use once_cell::sync::Lazy;
use std::fmt::Display;
use strum::EnumIter;

/// `comp` field of a compute instruction: the ALU expression. Bit 6 selects
/// the A or M operand; the remaining six bits drive the ALU control lines.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, EnumIter)]
pub enum Comp {
    Zero,
    One,
    MinusOne,
    D,
    A,
    NotD,
    NotA,
    MinusD,
    MinusA,
    DPlusOne,
    APlusOne,
    DMinusOne,
    AMinusOne,
    DPlusA,
    DMinusA,
    AMinusD,
    DAndA,
    DOrA,
    M,
    NotM,
    MinusM,
    MPlusOne,
    MMinusOne,
    DPlusM,
    DMinusM,
    MMinusD,
    DAndM,
    DOrM,
}

static COMP_STR: Lazy<BiMap<Comp, &'static str>> = Lazy::new(|| {
    let mut map: BiMap<Comp, &'static str> = BiMap::new();
    map.insert(Comp::Zero, "0");
    map.insert(Comp::One, "1");
    map.insert(Comp::MinusOne, "-1");
    map.insert(Comp::D, "D");
    map.insert(Comp::A, "A");
    map.insert(Comp::NotD, "!D");
    map.insert(Comp::NotA, "!A");
    map.insert(Comp::MinusD, "-D");
    map.insert(Comp::MinusA, "-A");
    map.insert(Comp::DPlusOne, "D+1");
    map.insert(Comp::APlusOne, "A+1");
    map.insert(Comp::DMinusOne, "D-1");
    map.insert(Comp::AMinusOne, "A-1");
    map.insert(Comp::DPlusA, "D+A");
    map.insert(Comp::DMinusA, "D-A");
    map.insert(Comp::AMinusD, "A-D");
    map.insert(Comp::DAndA, "D&A");
    map.insert(Comp::DOrA, "D|A");
    map.insert(Comp::M, "M");
    map.insert(Comp::NotM, "!M");
    map.insert(Comp::MinusM, "-M");
    map.insert(Comp::MPlusOne, "M+1");
    map.insert(Comp::MMinusOne, "M-1");
    map.insert(Comp::DPlusM, "D+M");
    map.insert(Comp::DMinusM, "D-M");
    map.insert(Comp::MMinusD, "M-D");
    map.insert(Comp::DAndM, "D&M");
    map.insert(Comp::DOrM, "D|M");
    map
});

static COMP_BIN: Lazy<BiMap<Comp, u16>> = Lazy::new(|| {
    let mut map: BiMap<Comp, u16> = BiMap::new();
    map.insert(Comp::Zero, 0b0101010);
    map.insert(Comp::One, 0b0111111);
    map.insert(Comp::MinusOne, 0b0111010);
    map.insert(Comp::D, 0b0001100);
    map.insert(Comp::A, 0b0110000);
    map.insert(Comp::NotD, 0b0001101);
    map.insert(Comp::NotA, 0b0110001);
    map.insert(Comp::MinusD, 0b0001111);
    map.insert(Comp::MinusA, 0b0110011);
    map.insert(Comp::DPlusOne, 0b0011111);
    map.insert(Comp::APlusOne, 0b0110111);
    map.insert(Comp::DMinusOne, 0b0001110);
    map.insert(Comp::AMinusOne, 0b0110010);
    map.insert(Comp::DPlusA, 0b0000010);
    map.insert(Comp::DMinusA, 0b0010011);
    map.insert(Comp::AMinusD, 0b0000111);
    map.insert(Comp::DAndA, 0b0000000);
    map.insert(Comp::DOrA, 0b0010101);
    map.insert(Comp::M, 0b1110000);
    map.insert(Comp::NotM, 0b1110001);
    map.insert(Comp::MinusM, 0b1110011);
    map.insert(Comp::MPlusOne, 0b1110111);
    map.insert(Comp::MMinusOne, 0b1110010);
    map.insert(Comp::DPlusM, 0b1000010);
    map.insert(Comp::DMinusM, 0b1010011);
    map.insert(Comp::MMinusD, 0b1000111);
    map.insert(Comp::DAndM, 0b1000000);
    map.insert(Comp::DOrM, 0b1010101);
    map
});

impl Comp {
    pub fn parse(s: &str) -> Result<Comp, String> {
        if let Some(comp) = COMP_STR.get_by_right(s) {
            Ok(*comp)
        } else {
            Err(format!("Unknown comp mnemonic: `{}`", s))
        }
    }

    pub fn bits(self) -> u16 {
        *COMP_BIN.get_by_left(&self).unwrap()
    }

    pub fn from_bits(bits: u16) -> Option<Comp> {
        COMP_BIN.get_by_right(&bits).copied()
    }

    pub fn format(&self) -> String {
        COMP_STR.get_by_left(self).unwrap().to_string()
    }
}

impl Display for Comp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
