/// Marker trait for view state.
///
/// `Default` doubles as the freshly mounted state of a view.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
