use bimap::BiMap;
use num_enum::TryFromPrimitive;
use once_cell::sync::Lazy;
use std::fmt::Display;
use strum::EnumIter;

/// `jump` field of a compute instruction: the comparison against zero that
/// decides whether to branch to the address register.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, TryFromPrimitive, EnumIter)]
#[repr(u8)]
pub enum Jump {
    #[default]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

// No entry for Null: a jump clause, once written, must name a condition.
static JUMP_STR: Lazy<BiMap<Jump, &'static str>> = Lazy::new(|| {
    let mut map: BiMap<Jump, &'static str> = BiMap::new();
    map.insert(Jump::JGT, "JGT");
    map.insert(Jump::JEQ, "JEQ");
    map.insert(Jump::JGE, "JGE");
    map.insert(Jump::JLT, "JLT");
    map.insert(Jump::JNE, "JNE");
    map.insert(Jump::JLE, "JLE");
    map.insert(Jump::JMP, "JMP");
    map
});

impl Jump {
    pub fn parse(s: &str) -> Result<Jump, String> {
        if let Some(jump) = JUMP_STR.get_by_right(s) {
            Ok(*jump)
        } else {
            Err(format!("Unknown jump mnemonic: `{}`", s))
        }
    }

    pub fn bits(self) -> u16 {
        self as u16
    }

    pub fn from_bits(bits: u16) -> Option<Jump> {
        u8::try_from(bits).ok().and_then(|b| Jump::try_from(b).ok())
    }

    pub fn format(&self) -> String {
        JUMP_STR
            .get_by_left(self)
            .copied()
            .unwrap_or_default()
            .to_string()
    }
}

impl Display for Jump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
