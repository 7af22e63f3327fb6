//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the upload section, the result card, the model embed,
//! and the chat widget while reading/writing shared state from Leptos context
//! providers.

pub mod analysis_card;
pub mod chat_widget;
pub mod drop_zone;
pub mod model_viewer;
pub mod preview_grid;
pub mod upload_panel;
