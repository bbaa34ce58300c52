//! Navigation targets and the navigator capability controllers call into.

use std::fmt;

/// Destinations a controller can ask to navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Products,
    ProductDetail { index: usize },
    Settings,
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavTarget::Products => write!(f, "products"),
            NavTarget::ProductDetail { index } => write!(f, "products/{}", index),
            NavTarget::Settings => write!(f, "settings"),
        }
    }
}

/// Performs navigation. Injected into effect handlers.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, target: NavTarget);
}

/// Navigator that only records the request in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate_to(&self, target: NavTarget) {
        tracing::info!(%target, "navigate");
    }
}
