use super::model;
use super::state::{ProductFormState, SubmitOutcome};
use contracts::domain::a001_product::aggregate::ProductField;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the Create Product form
#[derive(Clone, Copy)]
pub struct ProductCreateViewModel {
    pub state: RwSignal<ProductFormState>,
}

impl ProductCreateViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ProductFormState::new()),
        }
    }

    pub fn field_value(&self, field: ProductField) -> impl Fn() -> String + Copy + 'static {
        let state = self.state;
        move || state.with(|s| s.fields.value(field).to_string())
    }

    pub fn field_error(&self, field: ProductField) -> impl Fn() -> String + Copy + 'static {
        let state = self.state;
        move || state.with(|s| s.errors.get(field).to_string())
    }

    pub fn has_error(&self, field: ProductField) -> impl Fn() -> bool + Copy + 'static {
        let state = self.state;
        move || state.with(|s| s.errors.has_error(field))
    }

    pub fn is_saving(&self) -> impl Fn() -> bool + Copy + 'static {
        let state = self.state;
        move || state.with(|s| s.submission.is_saving)
    }

    pub fn is_successful(&self) -> impl Fn() -> bool + Copy + 'static {
        let state = self.state;
        move || state.with(|s| s.submission.is_successful)
    }

    pub fn error_message(&self) -> impl Fn() -> String + Copy + 'static {
        let state = self.state;
        move || state.with(|s| s.submission.error_message.clone())
    }

    pub fn set_field(&self, field: ProductField, value: String) {
        self.state.update(|s| s.set_field(field, value));
    }

    /// Validate a single field when its input loses focus
    pub fn on_blur(&self, field: ProductField, value: String) {
        self.state.update(|s| s.validate_field(field, &value));
    }

    /// Validate and send the form; the outcome lands in `state`
    pub fn submit_command(&self) {
        let Some(fields) = self.state.try_update(|s| s.begin_submit()) else {
            return;
        };
        log::debug!("Submitting product {:?}", fields);

        let state = self.state;
        spawn_local(async move {
            let result = model::save_product(&fields).await;
            match &result {
                Ok(SubmitOutcome::Created) => log::info!("Product stored"),
                Ok(SubmitOutcome::Accepted(status)) => {
                    log::info!("Product request accepted with status {}", status)
                }
                Err(e) => log::warn!("Product was not stored: {}", e),
            }

            state.update(|s| s.finish_submit(result));
        });
    }
}

impl Default for ProductCreateViewModel {
    fn default() -> Self {
        Self::new()
    }
}
