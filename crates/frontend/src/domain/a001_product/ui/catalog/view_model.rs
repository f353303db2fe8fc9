use contracts::domain::a001_product::{catalog, Product};
use contracts::shared::filters::{apply_filters, FilterSelection, FilterValue};
use leptos::prelude::*;

/// ViewModel каталога.
///
/// Чекбоксы меняют только `selection`; список на экране (`applied`)
/// пересчитывается по кнопке "Применить". Живёт всю сессию, поэтому
/// выбор сохраняется при переходах между разделами.
#[derive(Clone, Copy)]
pub struct CatalogVm {
    pub selection: RwSignal<FilterSelection>,
    pub applied: RwSignal<Vec<Product>>,
    pub filters_expanded: RwSignal<bool>,
}

impl CatalogVm {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(FilterSelection::default()),
            applied: RwSignal::new(catalog().to_vec()),
            filters_expanded: RwSignal::new(true),
        }
    }

    pub fn is_selected(&self, value: FilterValue) -> bool {
        self.selection.with(|s| s.is_selected(value))
    }

    pub fn active_count(&self) -> usize {
        self.selection.with(FilterSelection::active_count)
    }

    pub fn found_count(&self) -> usize {
        self.applied.with(Vec::len)
    }

    pub fn toggle_command(&self, value: FilterValue) {
        self.selection.update(|s| s.toggle(value));
    }

    pub fn apply_command(&self) {
        let filtered = self
            .selection
            .with_untracked(|selection| apply_filters(catalog(), selection));
        self.applied.set(filtered);
    }

    pub fn reset_command(&self) {
        self.selection.update(FilterSelection::reset);
        self.applied.set(catalog().to_vec());
    }
}

impl Default for CatalogVm {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_catalog() -> CatalogVm {
    use_context::<CatalogVm>().expect("CatalogVm not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{GlowColor, LedType};

    fn applied_names(vm: &CatalogVm) -> Vec<String> {
        vm.applied
            .get_untracked()
            .into_iter()
            .map(|p| p.name)
            .collect()
    }

    #[test]
    fn test_toggle_changes_selection_only() {
        Owner::new().with(|| {
            let vm = CatalogVm::new();
            vm.toggle_command(FilterValue::Power(40));

            assert!(vm.is_selected(FilterValue::Power(40)));
            assert_eq!(vm.active_count(), 1);
            assert_eq!(vm.found_count(), 6);
        });
    }

    #[test]
    fn test_apply_recomputes_visible_list() {
        Owner::new().with(|| {
            let vm = CatalogVm::new();
            vm.toggle_command(FilterValue::Color(GlowColor::WarmWhite));
            vm.toggle_command(FilterValue::LedType(LedType::Smd));
            vm.apply_command();

            assert_eq!(applied_names(&vm), vec!["LED Strip Warm".to_string()]);
            assert_eq!(vm.found_count(), 1);
        });
    }

    #[test]
    fn test_reset_restores_full_catalog_after_apply() {
        Owner::new().with(|| {
            let vm = CatalogVm::new();
            vm.toggle_command(FilterValue::Power(40));
            vm.apply_command();
            assert_eq!(vm.found_count(), 1);

            vm.reset_command();

            assert_eq!(vm.active_count(), 0);
            assert_eq!(vm.found_count(), 6);
            assert_eq!(vm.applied.get_untracked(), catalog().to_vec());
        });
    }
}
