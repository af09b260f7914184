// Components module - reusable UI building blocks
//
// Shell components frame the screen:
// - Title bar: App name, model, loading indicator
// - Status bar: Request state and keybind hints
// - Logs panel: System log entries
//
// Content components:
// - Form panel: Product inputs, vibe picker, generate button
// - Results panel: Captions and per-state placeholders
//
// Each component is a focused, single-responsibility module.

pub mod form_panel;
pub mod logs_panel;
pub mod results_panel;
pub mod status_bar;
pub mod text_field;
pub mod title_bar;
