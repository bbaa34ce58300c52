//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt;
use std::mem::Discriminant;

/// Trait for intent objects fed through an [`EventQueue`](crate::queue::EventQueue).
///
/// Intents represent:
/// - User actions (button clicks, pull-to-refresh)
/// - System events (fetch results, settings loaded)
/// - Navigation requests
///
/// Intents are normally enums. The queue coalesces by variant: two intents
/// share a type tag iff they are the same variant, whatever their payload.
pub trait Intent: fmt::Debug + Send + 'static {
    /// Whether this intent jumps ahead of everything already queued.
    fn is_top_priority(&self) -> bool {
        false
    }

    /// Type tag used for coalescing.
    fn kind(&self) -> Discriminant<Self>
    where
        Self: Sized,
    {
        std::mem::discriminant(self)
    }
}
