//! Terminal user interface
//!
//! [`app_component::AppComponent`] owns the [`crate::state::AppState`] and the
//! child components, [`renderer::run_app`] drives it from terminal events.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
