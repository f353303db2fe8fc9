use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Обязательное поле формы заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequiredField {
    Name,
    Phone,
    Address,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Name => "Имя",
            RequiredField::Phone => "Телефон",
            RequiredField::Address => "Адрес доставки",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Заполните обязательные поля: {}", join_labels(.0))]
    MissingRequiredFields(Vec<RequiredField>),
}

fn join_labels(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_lists_fields() {
        let err = OrderError::MissingRequiredFields(vec![RequiredField::Phone, RequiredField::Address]);
        assert_eq!(
            err.to_string(),
            "Заполните обязательные поля: Телефон, Адрес доставки"
        );
    }
}
