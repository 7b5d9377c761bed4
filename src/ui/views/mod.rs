//! Stateless page sections. Each renders static content into a
//! [`Document`](crate::ui::document::Document) and registers its buttons.

pub mod changelog;
pub mod docs;
pub mod downloads;
pub mod features;
pub mod footer;
pub mod hero;
pub mod not_found;
pub mod pricing;
