//! Site model: page identifiers, section composition and static content.
//!
//! Nothing in here knows about the terminal. The `ui` layer turns a
//! [`Page`] into a list of [`Section`]s through [`compose`] and renders
//! each section from the literals in [`content`].

pub mod composition;
pub mod content;
mod page;

pub use composition::{compose, Section};
pub use page::Page;
