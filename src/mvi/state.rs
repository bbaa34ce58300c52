//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data an observer needs)
/// - Comparable (PartialEq so unchanged states are not re-published)
pub trait UiState: Clone + PartialEq + Default + std::fmt::Debug + Send + Sync + 'static {}
