use serde::{Deserialize, Serialize};

/// Раздел одностраничной витрины
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Home,
    Catalog,
    About,
    Delivery,
    Contacts,
    Blog,
}

impl Section {
    /// Код раздела (используется в `?section=...`)
    pub fn code(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Catalog => "catalog",
            Section::About => "about",
            Section::Delivery => "delivery",
            Section::Contacts => "contacts",
            Section::Blog => "blog",
        }
    }

    /// Подпись пункта меню
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Catalog => "Каталог",
            Section::About => "О компании",
            Section::Delivery => "Доставка",
            Section::Contacts => "Контакты",
            Section::Blog => "Блог",
        }
    }

    /// Имя иконки для `icon()`
    pub fn icon_name(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Catalog => "package",
            Section::About => "building",
            Section::Delivery => "truck",
            Section::Contacts => "phone",
            Section::Blog => "book-open",
        }
    }

    /// Все разделы в порядке навигации
    pub fn all() -> Vec<Section> {
        vec![
            Section::Home,
            Section::Catalog,
            Section::About,
            Section::Delivery,
            Section::Contacts,
            Section::Blog,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_roundtrip() {
        for section in Section::all() {
            assert_eq!(Section::from_code(section.code()), Some(section));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(Section::from_code("checkout"), None);
        assert_eq!(Section::from_code(""), None);
        assert_eq!(Section::from_code("Catalog"), None);
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(Section::default(), Section::Home);
        assert_eq!(Section::all().len(), 6);
    }
}
