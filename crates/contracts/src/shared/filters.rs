//! Фильтрация каталога.
//!
//! Три независимых множества выбранных значений: мощность, цвет свечения и
//! тип светодиодов. Внутри измерения значения объединяются по ИЛИ, между
//! измерениями по И. Пустое множество не ограничивает измерение.

use crate::domain::a001_product::Product;
use crate::enums::{GlowColor, LedType};
use serde::{Deserialize, Serialize};

/// Одно значение фильтра (чекбокс или чип активного фильтра)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterValue {
    Power(u32),
    Color(GlowColor),
    LedType(LedType),
}

impl FilterValue {
    pub fn label(&self) -> String {
        match self {
            FilterValue::Power(w) => format!("{}W", w),
            FilterValue::Color(c) => c.display_name().to_string(),
            FilterValue::LedType(t) => t.display_name().to_string(),
        }
    }

    /// Стабильный id для связки `<input id>` и `<label for>`
    pub fn dom_id(&self) -> String {
        match self {
            FilterValue::Power(w) => format!("power-{}", w),
            FilterValue::Color(c) => format!("color-{}", c.code()),
            FilterValue::LedType(t) => format!("type-{}", t.code()),
        }
    }
}

/// Выбранные значения фильтров. Значения хранятся в порядке включения.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub power: Vec<u32>,
    pub color: Vec<GlowColor>,
    #[serde(rename = "ledType")]
    pub led_type: Vec<LedType>,
}

fn toggle_value<T: PartialEq>(values: &mut Vec<T>, value: T) {
    match values.iter().position(|v| *v == value) {
        Some(index) => {
            values.remove(index);
        }
        None => values.push(value),
    }
}

impl FilterSelection {
    pub fn toggle_power(&mut self, watts: u32) {
        toggle_value(&mut self.power, watts);
    }

    pub fn toggle_color(&mut self, color: GlowColor) {
        toggle_value(&mut self.color, color);
    }

    pub fn toggle_led_type(&mut self, led_type: LedType) {
        toggle_value(&mut self.led_type, led_type);
    }

    pub fn toggle(&mut self, value: FilterValue) {
        match value {
            FilterValue::Power(w) => self.toggle_power(w),
            FilterValue::Color(c) => self.toggle_color(c),
            FilterValue::LedType(t) => self.toggle_led_type(t),
        }
    }

    pub fn is_selected(&self, value: FilterValue) -> bool {
        match value {
            FilterValue::Power(w) => self.power.contains(&w),
            FilterValue::Color(c) => self.color.contains(&c),
            FilterValue::LedType(t) => self.led_type.contains(&t),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.power.is_empty() && self.color.is_empty() && self.led_type.is_empty()
    }

    /// Число выбранных значений во всех измерениях
    pub fn active_count(&self) -> usize {
        self.power.len() + self.color.len() + self.led_type.len()
    }

    /// Выбранные значения для чипов: мощность, цвет, тип
    pub fn values(&self) -> Vec<FilterValue> {
        self.power
            .iter()
            .map(|w| FilterValue::Power(*w))
            .chain(self.color.iter().map(|c| FilterValue::Color(*c)))
            .chain(self.led_type.iter().map(|t| FilterValue::LedType(*t)))
            .collect()
    }

    pub fn matches(&self, product: &Product) -> bool {
        (self.power.is_empty() || self.power.contains(&product.power))
            && (self.color.is_empty() || self.color.contains(&product.color))
            && (self.led_type.is_empty() || self.led_type.contains(&product.led_type))
    }

    pub fn reset(&mut self) {
        self.power.clear();
        self.color.clear();
        self.led_type.clear();
    }
}

/// Подмножество каталога, удовлетворяющее выбору, в исходном порядке
pub fn apply_filters(catalog: &[Product], selection: &FilterSelection) -> Vec<Product> {
    let filtered: Vec<Product> = catalog
        .iter()
        .filter(|p| selection.matches(p))
        .cloned()
        .collect();
    log::debug!(
        "filters: {} active, {} of {} products match",
        selection.active_count(),
        filtered.len(),
        catalog.len()
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::catalog;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_selection_returns_full_catalog_in_order() {
        let result = apply_filters(catalog(), &FilterSelection::default());
        assert_eq!(result, catalog().to_vec());
    }

    #[test]
    fn test_single_power_value() {
        let mut selection = FilterSelection::default();
        selection.toggle_power(40);
        let result = apply_filters(catalog(), &selection);
        assert_eq!(names(&result), vec!["LED Panel Pro 600"]);
    }

    #[test]
    fn test_values_within_dimension_are_union() {
        let mut selection = FilterSelection::default();
        selection.toggle_power(10);
        selection.toggle_power(50);
        let result = apply_filters(catalog(), &selection);
        assert_eq!(names(&result), vec!["LED Spotlight 50W", "LED Strip Warm"]);
    }

    #[test]
    fn test_dimensions_are_intersection() {
        let mut selection = FilterSelection::default();
        selection.toggle_color(GlowColor::WarmWhite);
        selection.toggle_led_type(LedType::Smd);
        let result = apply_filters(catalog(), &selection);
        assert_eq!(names(&result), vec!["LED Strip Warm"]);
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        let mut selection = FilterSelection::default();
        selection.toggle_power(50);
        selection.toggle_color(GlowColor::Rgb);
        assert!(apply_filters(catalog(), &selection).is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut selection = FilterSelection::default();
        selection.toggle_color(GlowColor::Daylight);
        selection.toggle(FilterValue::Power(15));
        let snapshot = selection.clone();

        selection.toggle(FilterValue::LedType(LedType::Cob));
        assert!(selection.is_selected(FilterValue::LedType(LedType::Cob)));
        selection.toggle(FilterValue::LedType(LedType::Cob));

        assert_eq!(selection, snapshot);
    }

    #[test]
    fn test_reset_restores_full_catalog() {
        let mut selection = FilterSelection::default();
        selection.toggle_power(20);
        selection.toggle_color(GlowColor::ColdWhite);
        selection.toggle_led_type(LedType::Rgb);
        assert_eq!(selection.active_count(), 3);

        selection.reset();

        assert!(selection.is_empty());
        assert_eq!(apply_filters(catalog(), &selection).len(), 6);
    }

    #[test]
    fn test_values_grouped_by_dimension() {
        let mut selection = FilterSelection::default();
        selection.toggle_led_type(LedType::Smd);
        selection.toggle_power(15);
        selection.toggle_color(GlowColor::Rgb);
        assert_eq!(
            selection.values(),
            vec![
                FilterValue::Power(15),
                FilterValue::Color(GlowColor::Rgb),
                FilterValue::LedType(LedType::Smd),
            ]
        );
    }

    #[test]
    fn test_filter_value_labels_and_ids() {
        assert_eq!(FilterValue::Power(40).label(), "40W");
        assert_eq!(FilterValue::Color(GlowColor::WarmWhite).label(), "Теплый белый");
        assert_eq!(FilterValue::LedType(LedType::Rgb).dom_id(), "type-rgb");
        assert_eq!(FilterValue::Color(GlowColor::Rgb).dom_id(), "color-rgb");
    }
}
