//! Terminal front end: state, views and the event loop that drives them.

pub mod app;
pub mod components;
pub mod dashboard;
pub mod document;
pub mod events;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod navbar;
pub mod render;
pub mod router;
pub mod runtime;
pub mod screen;
pub mod terminal_guard;
pub mod theme;
pub mod views;
