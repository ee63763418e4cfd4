use super::view_model::ProductCreateViewModel;
use contracts::domain::a001_product::aggregate::{ProductField, ProductType};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductCreate() -> impl IntoView {
    let vm = ProductCreateViewModel::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    let type_error = vm.field_error(ProductField::Type);
    let type_has_error = vm.has_error(ProductField::Type);
    let error_message = vm.error_message();

    view! {
        <div class="details-container product-create">
            <div class="details-header">
                <h1>"Create Product"</h1>
            </div>

            <Show when=vm.is_successful()>
                <MessageBar intent=MessageBarIntent::Success>
                    <p>"Product Stored"</p>
                </MessageBar>
            </Show>

            <Show when=move || !error_message().is_empty()>
                <MessageBar intent=MessageBarIntent::Error>
                    <p class="error-message">{error_message}</p>
                </MessageBar>
            </Show>

            <form class="details-form" on:submit=on_submit>
                <TextFieldRow vm=vm field=ProductField::Name label="name" />
                <TextFieldRow vm=vm field=ProductField::Size label="size" />

                <div class="form-group">
                    <label for="type">"Type"</label>
                    <select
                        id="type"
                        name="type"
                        class=move || if type_has_error() { "form-input form-input--error" } else { "form-input" }
                        prop:value=vm.field_value(ProductField::Type)
                        on:change=move |ev| vm.set_field(ProductField::Type, event_target_value(&ev))
                        on:blur=move |ev| vm.on_blur(ProductField::Type, event_target_value(&ev))
                    >
                        <option aria-label="None" value="" />
                        {ProductType::all()
                            .into_iter()
                            .map(|t| view! { <option value=t.code()>{t.code()}</option> })
                            .collect_view()}
                    </select>
                    <Show when=type_has_error>
                        <p class="helper-text helper-text--error">{type_error}</p>
                    </Show>
                </div>

                <div class="details-actions">
                    <button type="submit" class="btn btn-primary" disabled=vm.is_saving()>
                        "Submit"
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Labeled text input bound to one form field, with its helper/error text
#[component]
fn TextFieldRow(
    vm: ProductCreateViewModel,
    field: ProductField,
    label: &'static str,
) -> impl IntoView {
    let key = field.key();
    let has_error = vm.has_error(field);
    let error = vm.field_error(field);

    view! {
        <div class="form-group">
            <label for=key>{label}</label>
            <input
                type="text"
                id=key
                name=key
                class=move || if has_error() { "form-input form-input--error" } else { "form-input" }
                prop:value=vm.field_value(field)
                on:input=move |ev| vm.set_field(field, event_target_value(&ev))
                on:blur=move |ev| vm.on_blur(field, event_target_value(&ev))
            />
            <Show when=has_error>
                <p class="helper-text helper-text--error">{error}</p>
            </Show>
        </div>
    }
}
