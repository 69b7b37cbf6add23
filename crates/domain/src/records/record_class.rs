use std::fmt;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordClass {
    /// Internet
    In,
    /// Chaosnet
    Ch,
    /// Hesiod
    Hs,
    /// NONE (used in dynamic updates)
    None,
    /// Wildcard match for all classes
    Any,
    Unknown(u16),
}

impl RecordClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordClass::In => "IN",
            RecordClass::Ch => "CH",
            RecordClass::Hs => "HS",
            RecordClass::None => "NONE",
            RecordClass::Any => "ANY",
            RecordClass::Unknown(_) => "UNKNOWN",
        }
    }

    pub fn to_u16(self) -> u16 {
        match self {
            RecordClass::In => 1,
            RecordClass::Ch => 3,
            RecordClass::Hs => 4,
            RecordClass::None => 254,
            RecordClass::Any => 255,
            RecordClass::Unknown(code) => code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordClass::In,
            3 => RecordClass::Ch,
            4 => RecordClass::Hs,
            254 => RecordClass::None,
            255 => RecordClass::Any,
            _ => {
                warn!(code, "unrecognized record class code");
                RecordClass::Unknown(code)
            }
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordClass::Unknown(code) => write!(f, "CLASS{}", code),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}

impl FromStr for RecordClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" => Ok(RecordClass::In),
            "CH" => Ok(RecordClass::Ch),
            "HS" => Ok(RecordClass::Hs),
            "NONE" => Ok(RecordClass::None),
            "ANY" => Ok(RecordClass::Any),
            _ => Err(format!("Unknown record class: {}", s)),
        }
    }
}
