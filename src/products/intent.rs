use crate::data::Product;
use crate::mvi::Intent;
use crate::navigation::NavTarget;

/// Outcome of a products fetch, folded into an intent payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductsResponse {
    Success(Vec<Product>),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductsIntent {
    /// Settings have not been loaded yet. Top priority.
    SettingsUninitialized,
    /// First load requested at startup.
    ProductsUninitialized,
    /// User asked to retry after an error.
    RetryProducts,
    /// User pulled to refresh.
    RefreshProducts,
    LoadFinished(ProductsResponse),
    RefreshFinished(ProductsResponse),
    NavigateTo(NavTarget),
}

impl Intent for ProductsIntent {
    fn is_top_priority(&self) -> bool {
        matches!(self, ProductsIntent::SettingsUninitialized)
    }
}
