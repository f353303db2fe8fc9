use serde::{Deserialize, Serialize};
use std::fmt;

/// Цвет свечения светильника
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlowColor {
    ColdWhite,
    WarmWhite,
    Daylight,
    Rgb,
}

impl GlowColor {
    /// Получить код цвета
    pub fn code(&self) -> &'static str {
        match self {
            GlowColor::ColdWhite => "cold-white",
            GlowColor::WarmWhite => "warm-white",
            GlowColor::Daylight => "daylight",
            GlowColor::Rgb => "rgb",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            GlowColor::ColdWhite => "Холодный белый",
            GlowColor::WarmWhite => "Теплый белый",
            GlowColor::Daylight => "Дневной свет",
            GlowColor::Rgb => "RGB",
        }
    }

    /// Все цвета в порядке отображения в фильтре
    pub fn all() -> Vec<GlowColor> {
        vec![
            GlowColor::ColdWhite,
            GlowColor::WarmWhite,
            GlowColor::Daylight,
            GlowColor::Rgb,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cold-white" => Some(GlowColor::ColdWhite),
            "warm-white" => Some(GlowColor::WarmWhite),
            "daylight" => Some(GlowColor::Daylight),
            "rgb" => Some(GlowColor::Rgb),
            _ => None,
        }
    }
}

impl fmt::Display for GlowColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for color in GlowColor::all() {
            assert_eq!(GlowColor::from_code(color.code()), Some(color));
        }
        assert_eq!(GlowColor::from_code("purple"), None);
    }

    #[test]
    fn test_display_uses_russian_label() {
        assert_eq!(GlowColor::WarmWhite.to_string(), "Теплый белый");
    }
}
