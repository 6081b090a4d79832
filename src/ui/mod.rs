//! UI sub-modules for EventCatalog.
//!
//! Each sub-module adds rendering methods to [`crate::app::CatalogApp`]
//! via `impl` blocks, keeping UI code separate from state management.

pub mod category_manager;
pub mod detail_panel;
pub mod event_editor;
pub mod event_table;
pub mod filter_panel;
pub mod pager;
pub mod status_bar;
pub mod theme;
pub mod toolbar;
