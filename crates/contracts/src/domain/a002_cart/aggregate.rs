use crate::domain::a001_product::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// Корзина: упорядоченный список снимков товаров.
///
/// Количество не агрегируется: повторное добавление того же товара
/// создаёт ещё одну позицию. Удаление по id убирает только первое вхождение.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        log::debug!("cart: added product {}", product.id);
        self.items.push(product);
    }

    /// Удалить первую позицию с указанным id. Возвращает `false`, если такой нет.
    pub fn remove_first(&mut self, id: ProductId) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                log::debug!("cart: removed product {} at position {}", id, index);
                true
            }
            None => false,
        }
    }

    pub fn total_price(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.price)).sum()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::find_by_id;

    fn product(id: u32) -> Product {
        find_by_id(ProductId(id)).cloned().expect("product in catalog")
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), 0);
    }

    #[test]
    fn test_same_product_twice_creates_two_entries() {
        let mut cart = Cart::new();
        let bulb = product(3);
        cart.add(bulb.clone());
        cart.add(bulb.clone());

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_price(), 2 * u64::from(bulb.price));

        assert!(cart.remove_first(bulb.id));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].id, bulb.id);
    }

    #[test]
    fn test_remove_only_first_occurrence() {
        let mut cart = Cart::new();
        cart.add(product(1));
        cart.add(product(2));
        cart.add(product(1));

        cart.remove_first(ProductId(1));

        let ids: Vec<u32> = cart.items().iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(product(4));
        let before = cart.clone();

        assert!(!cart.remove_first(ProductId(99)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_total_is_sum_of_entries() {
        let mut cart = Cart::new();
        cart.add(product(1));
        cart.add(product(6));
        assert_eq!(cart.total_price(), 3499 + 999);

        cart.clear();
        assert!(cart.is_empty());
    }
}
