use leptos::prelude::*;

use super::model::ItemForm;
use crate::domain::a001_item::api;
use crate::system::auth::context::SessionContext;

/// ViewModel for the item create/edit form
#[derive(Clone, Copy)]
pub struct ItemFormViewModel {
    pub item_name: RwSignal<String>,
    pub stock: RwSignal<bool>,
    pub description: RwSignal<String>,
    pub price_without_tax: RwSignal<String>,
    pub tax_rate: RwSignal<String>,
    pub currency: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub loading: RwSignal<bool>,
}

impl ItemFormViewModel {
    pub fn new() -> Self {
        let form = ItemForm::default();
        Self {
            item_name: RwSignal::new(form.item_name),
            stock: RwSignal::new(form.stock),
            description: RwSignal::new(form.description),
            price_without_tax: RwSignal::new(form.price_without_tax),
            tax_rate: RwSignal::new(form.tax_rate),
            currency: RwSignal::new(form.currency),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            loading: RwSignal::new(false),
        }
    }

    fn fill(&self, form: ItemForm) {
        self.item_name.set(form.item_name);
        self.stock.set(form.stock);
        self.description.set(form.description);
        self.price_without_tax.set(form.price_without_tax);
        self.tax_rate.set(form.tax_rate);
        self.currency.set(form.currency);
    }

    fn snapshot(&self) -> ItemForm {
        ItemForm {
            item_name: self.item_name.get_untracked(),
            stock: self.stock.get_untracked(),
            description: self.description.get_untracked(),
            price_without_tax: self.price_without_tax.get_untracked(),
            tax_rate: self.tax_rate.get_untracked(),
            currency: self.currency.get_untracked(),
        }
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, session: SessionContext, id: Option<String>) {
        let Some(id) = id else {
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_admin_item(&session.client(), &id).await {
                Ok(item) => {
                    vm.fill(ItemForm::from(item));
                    vm.error.set(None);
                }
                Err(e) => vm.error.set(Some(e)),
            }
            vm.loading.set(false);
        });
    }

    /// Validate, then create (no id) or update (id).
    pub fn save_command(&self, session: SessionContext, id: Option<String>, on_saved: Callback<()>) {
        let form = self.snapshot();
        let dto = match &id {
            Some(_) => form.to_update_dto(),
            None => form.to_create_dto(),
        };
        let dto = match dto {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        let vm = *self;
        vm.saving.set(true);
        vm.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let client = session.client();
            let result = match id {
                Some(id) => api::update_item(&client, &id, &dto).await,
                None => api::create_item(&client, &dto).await,
            };
            vm.saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => vm.error.set(Some(e)),
            }
        });
    }
}

impl Default for ItemFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
