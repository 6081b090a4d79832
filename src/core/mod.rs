//! Core domain modules for EventCatalog.
//!
//! Contains the event and category data model, the tabular view engine
//! (filter, sort, paginate), schedule formatting, form validation and
//! media classification. Nothing here performs I/O.

pub mod category;
pub mod event_record;
pub mod filter;
pub mod media;
pub mod pagination;
pub mod schedule_format;
pub mod sort;
pub mod table_view;
pub mod validation;
