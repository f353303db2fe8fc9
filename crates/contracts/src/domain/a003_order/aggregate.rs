use super::error::{OrderError, RequiredField};
use crate::domain::a002_cart::Cart;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Форма оформления заказа. Существует только в памяти сессии.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub comment: String,
}

impl OrderForm {
    /// Незаполненные обязательные поля (пустые строки)
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        [
            (RequiredField::Name, &self.name),
            (RequiredField::Phone, &self.phone),
            (RequiredField::Address, &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn validate(&self) -> Result<(), OrderError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(OrderError::MissingRequiredFields(missing))
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Результат успешного оформления заказа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_number: Uuid,
    pub items: usize,
    pub total: u64,
    pub submitted_at: DateTime<Utc>,
}

/// Оформить заказ.
///
/// При ошибке валидации корзина и форма не меняются. При успехе корзина
/// очищается, а форма сбрасывается в пустое состояние.
pub fn submit_order(cart: &mut Cart, form: &mut OrderForm) -> Result<OrderConfirmation, OrderError> {
    if let Err(e) = form.validate() {
        log::warn!("order: validation failed: {}", e);
        return Err(e);
    }

    let confirmation = OrderConfirmation {
        order_number: Uuid::new_v4(),
        items: cart.len(),
        total: cart.total_price(),
        submitted_at: Utc::now(),
    };
    log::info!(
        "order: submitted {} ({} items, total {})",
        confirmation.order_number,
        confirmation.items,
        confirmation.total
    );

    cart.clear();
    form.reset();
    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::{find_by_id, ProductId};

    fn filled_form() -> OrderForm {
        OrderForm {
            name: "Иван Иванов".to_string(),
            phone: "+7 (999) 123-45-67".to_string(),
            email: String::new(),
            address: "Москва, ул. Примерная, д. 1, кв. 1".to_string(),
            comment: String::new(),
        }
    }

    fn cart_with(ids: &[u32]) -> Cart {
        let mut cart = Cart::new();
        for id in ids {
            if let Some(p) = find_by_id(ProductId(*id)) {
                cart.add(p.clone());
            }
        }
        cart
    }

    #[test]
    fn test_missing_address_leaves_state_unchanged() {
        let mut cart = cart_with(&[1, 2]);
        let mut form = filled_form();
        form.address.clear();
        let cart_before = cart.clone();
        let form_before = form.clone();

        let result = submit_order(&mut cart, &mut form);

        assert_eq!(
            result,
            Err(OrderError::MissingRequiredFields(vec![RequiredField::Address]))
        );
        assert_eq!(cart, cart_before);
        assert_eq!(form, form_before);
    }

    #[test]
    fn test_successful_submit_clears_cart_and_form() {
        let mut cart = cart_with(&[1, 3, 3]);
        let mut form = filled_form();
        form.comment = "Позвонить заранее".to_string();

        let confirmation = submit_order(&mut cart, &mut form).expect("valid order");

        assert_eq!(confirmation.items, 3);
        assert_eq!(confirmation.total, 3499 + 899 + 899);
        assert!(cart.is_empty());
        assert_eq!(form, OrderForm::default());
    }

    #[test]
    fn test_whitespace_fields_count_as_filled() {
        let mut cart = cart_with(&[2]);
        let mut form = OrderForm {
            name: " ".to_string(),
            phone: "+7 (999) 123-45-67".to_string(),
            address: "Адрес".to_string(),
            ..OrderForm::default()
        };
        assert!(form.missing_fields().is_empty());

        let confirmation = submit_order(&mut cart, &mut form).expect("valid order");
        assert_eq!(confirmation.items, 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_all_required_fields_missing() {
        assert_eq!(
            OrderForm::default().missing_fields(),
            vec![RequiredField::Name, RequiredField::Phone, RequiredField::Address]
        );
    }

    #[test]
    fn test_optional_fields_not_required() {
        let form = filled_form();
        assert!(form.email.is_empty());
        assert!(form.comment.is_empty());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_empty_cart_submission_is_accepted() {
        let mut cart = Cart::new();
        let mut form = filled_form();
        let confirmation = submit_order(&mut cart, &mut form).expect("valid order");
        assert_eq!(confirmation.items, 0);
        assert_eq!(confirmation.total, 0);
    }

    #[test]
    fn test_each_submission_gets_new_number() {
        let mut cart = Cart::new();
        let a = submit_order(&mut cart, &mut filled_form()).expect("valid order");
        let b = submit_order(&mut cart, &mut filled_form()).expect("valid order");
        assert_ne!(a.order_number, b.order_number);
    }
}
