use crate::enums::{GlowColor, LedType};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Product
// ============================================================================

/// Товар каталога. Неизменяемая запись: каталог задан статически.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Мощность, Вт
    pub power: u32,
    pub color: GlowColor,
    #[serde(rename = "ledType")]
    pub led_type: LedType,
    /// Цена в рублях
    pub price: u32,
    pub image: String,
    pub description: String,
}

impl Product {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        name: &str,
        category: &str,
        power: u32,
        color: GlowColor,
        led_type: LedType,
        price: u32,
        description: &str,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            power,
            color,
            led_type,
            price,
            image: PLACEHOLDER_IMAGE.to_string(),
            description: description.to_string(),
        }
    }

    /// Подпись мощности для карточки, например "40W"
    pub fn power_label(&self) -> String {
        format!("{}W", self.power)
    }
}

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::new(12).to_string(), "12");
        assert_eq!(ProductId::new(4).value(), 4);
    }

    #[test]
    fn test_power_label() {
        let p = Product::new(1, "X", "Y", 40, GlowColor::Rgb, LedType::Rgb, 1, "");
        assert_eq!(p.power_label(), "40W");
        assert_eq!(p.image, PLACEHOLDER_IMAGE);
    }
}
