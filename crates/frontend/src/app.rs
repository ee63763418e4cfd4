use crate::domain::a001_product::ui::create::ProductCreate;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-main">
            <ProductCreate />
        </main>
    }
}
