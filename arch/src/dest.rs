use bimap::BiMap;
use num_enum::TryFromPrimitive;
use once_cell::sync::Lazy;
use std::fmt::Display;
use strum::EnumIter;

/// `dest` field of a compute instruction. The three bits gate the A, D and
/// M registers in order, so the encoding is the discriminant itself.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, TryFromPrimitive, EnumIter)]
#[repr(u8)]
pub enum Dest {
    #[default]
    Null = 0b000,
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

// The empty mnemonic is a real table entry: `=comp` stores nowhere.
static DEST_STR: Lazy<BiMap<Dest, &'static str>> = Lazy::new(|| {
    let mut map: BiMap<Dest, &'static str> = BiMap::new();
    map.insert(Dest::Null, "");
    map.insert(Dest::M, "M");
    map.insert(Dest::D, "D");
    map.insert(Dest::MD, "MD");
    map.insert(Dest::A, "A");
    map.insert(Dest::AM, "AM");
    map.insert(Dest::AD, "AD");
    map.insert(Dest::AMD, "AMD");
    map
});

impl Dest {
    pub fn parse(s: &str) -> Result<Dest, String> {
        if let Some(dest) = DEST_STR.get_by_right(s) {
            Ok(*dest)
        } else {
            Err(format!("Unknown dest mnemonic: `{}`", s))
        }
    }

    pub fn bits(self) -> u16 {
        self as u16
    }

    pub fn from_bits(bits: u16) -> Option<Dest> {
        u8::try_from(bits).ok().and_then(|b| Dest::try_from(b).ok())
    }

    pub fn format(&self) -> String {
        DEST_STR.get_by_left(self).unwrap().to_string()
    }
}

impl Display for Dest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
