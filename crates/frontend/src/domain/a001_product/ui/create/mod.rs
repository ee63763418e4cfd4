//! Create Product form
//!
//! Simplified MVVM pattern implementation:
//! - state.rs: form state machine (validation, submission lifecycle)
//! - model.rs: API function (save)
//! - view_model.rs: ViewModel with commands over reactive state
//! - view.rs: Leptos component (pure UI)

mod model;
pub mod state;
mod view;
mod view_model;

pub use view::ProductCreate;
pub use view_model::ProductCreateViewModel;
