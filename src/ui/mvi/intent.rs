//! Marker trait for intents.

/// Something that happened: a navigation request, a toggle, a tick.
///
/// Intents carry data only; reducers decide what they mean.
pub trait Intent: Send + 'static {}
