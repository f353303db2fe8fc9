//! Статический каталог товаров.
//!
//! Каталог не меняется во время работы: ни создания, ни удаления записей.

use super::aggregate::{Product, ProductId};
use crate::enums::{GlowColor, LedType};
use once_cell::sync::Lazy;

/// Значения мощности, предлагаемые в фильтре (Вт).
/// 12 Вт есть в каталоге, но в фильтре не предлагается.
pub const POWER_OPTIONS: [u32; 5] = [10, 15, 20, 40, 50];

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new(
            1,
            "LED Panel Pro 600",
            "Панели",
            40,
            GlowColor::ColdWhite,
            LedType::Smd,
            3499,
            "Профессиональная LED панель для офисов",
        ),
        Product::new(
            2,
            "LED Strip RGB",
            "Ленты",
            15,
            GlowColor::Rgb,
            LedType::Rgb,
            1299,
            "Цветная LED лента с управлением",
        ),
        Product::new(
            3,
            "LED Bulb Smart",
            "Лампы",
            12,
            GlowColor::WarmWhite,
            LedType::Cob,
            899,
            "Умная LED лампа с приложением",
        ),
        Product::new(
            4,
            "LED Spotlight 50W",
            "Прожекторы",
            50,
            GlowColor::Daylight,
            LedType::Cob,
            2199,
            "Мощный LED прожектор для улицы",
        ),
        Product::new(
            5,
            "LED Panel Slim 300",
            "Панели",
            20,
            GlowColor::ColdWhite,
            LedType::Smd,
            1899,
            "Тонкая LED панель для потолков",
        ),
        Product::new(
            6,
            "LED Strip Warm",
            "Ленты",
            10,
            GlowColor::WarmWhite,
            LedType::Smd,
            999,
            "Теплая LED лента для уюта",
        ),
    ]
});

/// Весь каталог в исходном порядке
pub fn catalog() -> &'static [Product] {
    &CATALOG
}

pub fn find_by_id(id: ProductId) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.id == id)
}

/// Первые `count` товаров каталога (блок "Популярные товары")
pub fn popular(count: usize) -> &'static [Product] {
    &CATALOG[..count.min(CATALOG.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_six_unique_products() {
        let items = catalog();
        assert_eq!(items.len(), 6);
        let ids: HashSet<_> = items.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 6);
        assert_eq!(items[0].name, "LED Panel Pro 600");
        assert_eq!(items[5].name, "LED Strip Warm");
    }

    #[test]
    fn test_find_by_id() {
        let bulb = find_by_id(ProductId(3)).map(|p| p.name.as_str());
        assert_eq!(bulb, Some("LED Bulb Smart"));
        assert!(find_by_id(ProductId(42)).is_none());
    }

    #[test]
    fn test_popular_is_catalog_prefix() {
        let names: Vec<_> = popular(3).iter().map(|p| p.id.value()).collect();
        assert_eq!(names, vec![1, 2, 3]);
        assert_eq!(popular(100).len(), 6);
    }
}
