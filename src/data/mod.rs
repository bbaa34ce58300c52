//! External collaborators: product catalogue and settings storage.

mod clock;
mod error;
mod product;
mod repository;
mod settings;
mod source;

pub use clock::{Clock, SystemClock};
pub use error::{FetchError, SettingsError};
pub use product::{Product, ProductRecord, Rating};
pub use repository::{CachedProductsRepository, ProductsCache, ProductsRepository};
pub use settings::{FileSettingsRepository, Settings, SettingsRepository};
pub use source::{HttpProductsSource, ProductsSource};
