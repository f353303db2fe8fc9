use serde::{Deserialize, Serialize};
use std::fmt;

/// Тип светодиодов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedType {
    Smd,
    Cob,
    Rgb,
}

impl LedType {
    pub fn code(&self) -> &'static str {
        match self {
            LedType::Smd => "smd",
            LedType::Cob => "cob",
            LedType::Rgb => "rgb",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LedType::Smd => "SMD",
            LedType::Cob => "COB",
            LedType::Rgb => "RGB",
        }
    }

    pub fn all() -> Vec<LedType> {
        vec![LedType::Smd, LedType::Cob, LedType::Rgb]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "smd" => Some(LedType::Smd),
            "cob" => Some(LedType::Cob),
            "rgb" => Some(LedType::Rgb),
            _ => None,
        }
    }
}

impl fmt::Display for LedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
