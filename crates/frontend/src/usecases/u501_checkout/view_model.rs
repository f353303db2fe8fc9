use crate::layout::global_context::StoreContext;
use crate::shared::toast::ToastService;
use contracts::domain::a003_order::{submit_order, OrderConfirmation, OrderError, OrderForm};
use leptos::prelude::*;

pub const ORDER_SUCCESS_MESSAGE: &str =
    "Заказ успешно оформлен! Мы свяжемся с вами в ближайшее время.";

/// ViewModel формы оформления заказа.
///
/// Поля отдельными RwSignal для двусторонней привязки THAW. Создаётся один
/// раз вместе с диалогом, поэтому "Отмена" не теряет введённые данные.
#[derive(Clone, Copy)]
pub struct CheckoutVm {
    pub name: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub email: RwSignal<String>,
    pub address: RwSignal<String>,
    pub comment: RwSignal<String>,
}

impl CheckoutVm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            comment: RwSignal::new(String::new()),
        }
    }

    pub fn to_form(&self) -> OrderForm {
        OrderForm {
            name: self.name.get_untracked(),
            phone: self.phone.get_untracked(),
            email: self.email.get_untracked(),
            address: self.address.get_untracked(),
            comment: self.comment.get_untracked(),
        }
    }

    pub fn load_form(&self, form: &OrderForm) {
        self.name.set(form.name.clone());
        self.phone.set(form.phone.clone());
        self.email.set(form.email.clone());
        self.address.set(form.address.clone());
        self.comment.set(form.comment.clone());
    }

    /// Оформить заказ по текущим полям формы.
    ///
    /// При успехе корзина очищается, поля сбрасываются, диалог закрывается.
    /// При ошибке корзина и поля не меняются.
    pub fn submit(&self, store: StoreContext) -> Result<OrderConfirmation, OrderError> {
        let mut form = self.to_form();
        let mut cart = store.cart.get_untracked();

        let confirmation = submit_order(&mut cart, &mut form)?;
        log::info!(
            "checkout: order {} confirmed at {}",
            confirmation.order_number,
            confirmation.submitted_at
        );
        store.cart.set(cart);
        self.load_form(&form);
        store.checkout_open.set(false);
        Ok(confirmation)
    }

    /// Кнопка "Подтвердить заказ": результат показывается уведомлением
    pub fn submit_command(&self, store: StoreContext, toasts: ToastService) {
        match self.submit(store) {
            Ok(_) => toasts.success(ORDER_SUCCESS_MESSAGE),
            Err(e) => toasts.error(e.to_string()),
        }
    }

    pub fn cancel_command(&self, store: StoreContext) {
        store.checkout_open.set(false);
    }
}

impl Default for CheckoutVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::{find_by_id, ProductId};
    use contracts::domain::a003_order::RequiredField;

    fn store_with_cart(ids: &[u32]) -> StoreContext {
        let store = StoreContext::new();
        for id in ids {
            if let Some(product) = find_by_id(ProductId(*id)) {
                store.add_to_cart(product);
            }
        }
        store.checkout_open.set(true);
        store
    }

    fn fill(vm: &CheckoutVm) {
        vm.name.set("Иван Иванов".to_string());
        vm.phone.set("+7 (999) 123-45-67".to_string());
        vm.address.set("Москва, ул. Примерная, д. 1".to_string());
        vm.comment.set("Позвонить заранее".to_string());
    }

    #[test]
    fn test_submit_success_clears_cart_and_fields() {
        Owner::new().with(|| {
            let store = store_with_cart(&[1, 2]);
            let vm = CheckoutVm::new();
            fill(&vm);

            let confirmation = vm.submit(store).expect("valid order");

            assert_eq!(confirmation.items, 2);
            assert_eq!(confirmation.total, 3499 + 1299);
            assert_eq!(store.cart_len(), 0);
            assert!(!store.checkout_open.get_untracked());
            assert_eq!(vm.to_form(), OrderForm::default());
        });
    }

    #[test]
    fn test_submit_failure_keeps_cart_and_fields() {
        Owner::new().with(|| {
            let store = store_with_cart(&[3]);
            let vm = CheckoutVm::new();
            fill(&vm);
            vm.address.set(String::new());
            let form_before = vm.to_form();

            let result = vm.submit(store);

            assert_eq!(
                result,
                Err(OrderError::MissingRequiredFields(vec![RequiredField::Address]))
            );
            assert_eq!(store.cart_len(), 1);
            assert!(store.checkout_open.get_untracked());
            assert_eq!(vm.to_form(), form_before);
        });
    }

    #[test]
    fn test_cancel_keeps_form_contents() {
        Owner::new().with(|| {
            let store = store_with_cart(&[1]);
            let vm = CheckoutVm::new();
            fill(&vm);
            let form_before = vm.to_form();

            vm.cancel_command(store);

            assert!(!store.checkout_open.get_untracked());
            assert_eq!(vm.to_form(), form_before);
            assert_eq!(store.cart_len(), 1);
        });
    }
}
