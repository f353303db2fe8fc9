use crate::shared::number_format::format_price;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub store: StoreInfo,
    #[serde(default)]
    pub contacts: ContactsConfig,
    #[serde(default)]
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StoreInfo {
    pub name: String,
    pub copyright_year: i32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ContactsConfig {
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub hours: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DeliveryConfig {
    /// Сумма заказа (₽), от которой курьерская доставка бесплатна
    #[serde(default)]
    pub free_threshold: u64,
    #[serde(default)]
    pub methods: Vec<DeliveryMethod>,
}

/// Подстановка в `details`, заменяется на порог бесплатной доставки
const FREE_THRESHOLD_PLACEHOLDER: &str = "{free_threshold}";

impl DeliveryConfig {
    /// Текст способа доставки с подставленным порогом ("5 000 ₽")
    pub fn details_of(&self, method: &DeliveryMethod) -> String {
        method
            .details
            .replace(FREE_THRESHOLD_PLACEHOLDER, &format_price(self.free_threshold))
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DeliveryMethod {
    pub title: String,
    pub details: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub toast_duration_ms: u32,
    pub log_level: String,
}

impl UiConfig {
    /// Уровень логирования; неизвестное значение трактуется как Debug
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Конфигурация, встроенная в бандл
const BUNDLED_CONFIG: &str = include_str!("../../config.toml");

/// Load store configuration bundled at build time
pub fn load_config() -> anyhow::Result<StoreConfig> {
    parse_config(BUNDLED_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<StoreConfig> {
    let config: StoreConfig = toml::from_str(contents)?;
    Ok(config)
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: "LED Store".to_string(),
            copyright_year: 2024,
        }
    }
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            address: "Москва, ул. Примерная, д. 123".to_string(),
            phone: "+7 (495) 123-45-67".to_string(),
            email: "info@ledstore.ru".to_string(),
            hours: vec![
                "Пн-Пт: 9:00 - 18:00".to_string(),
                "Сб-Вс: выходной".to_string(),
            ],
        }
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        let method = |title: &str, details: &str| DeliveryMethod {
            title: title.to_string(),
            details: details.to_string(),
        };
        Self {
            free_threshold: 5000,
            methods: vec![
                method(
                    "Курьерская доставка по Москве",
                    "Бесплатно при заказе от {free_threshold}. Доставка 1-2 дня.",
                ),
                method("Доставка по России", "Транспортные компании. Срок 3-7 дней."),
                method("Самовывоз", "Из нашего офиса в Москве. Бесплатно."),
            ],
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 4000,
            log_level: "debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_matches_defaults() {
        let config = load_config().unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = parse_config("[ui]\ntoast_duration_ms = 1500\nlog_level = \"warn\"\n").unwrap();
        assert_eq!(config.ui.toast_duration_ms, 1500);
        assert_eq!(config.ui.log_level(), log::Level::Warn);
        assert_eq!(config.store.name, "LED Store");
        assert_eq!(config.delivery.methods.len(), 3);
        assert_eq!(config.delivery.free_threshold, 5000);
    }

    #[test]
    fn test_delivery_details_render_threshold() {
        let mut delivery = load_config().unwrap().delivery;
        assert_eq!(
            delivery.details_of(&delivery.methods[0]),
            "Бесплатно при заказе от 5 000 ₽. Доставка 1-2 дня."
        );

        delivery.free_threshold = 7500;
        assert_eq!(
            delivery.details_of(&delivery.methods[0]),
            "Бесплатно при заказе от 7 500 ₽. Доставка 1-2 дня."
        );
        assert_eq!(delivery.details_of(&delivery.methods[2]), delivery.methods[2].details);
    }

    #[test]
    fn test_unknown_log_level_is_debug() {
        let ui = UiConfig {
            log_level: "loud".to_string(),
            ..UiConfig::default()
        };
        assert_eq!(ui.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(parse_config("[store\nname = 1").is_err());
    }
}
