use crate::data::Product;
use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProductsState {
    #[default]
    Uninitialized,
    Loading,
    /// Refresh in flight; keeps showing the products we already had.
    Refreshing { products: Vec<Product> },
    Successful { products: Vec<Product> },
    Error { message: String },
}

impl UiState for ProductsState {}

impl ProductsState {
    pub fn products(&self) -> &[Product] {
        match self {
            ProductsState::Refreshing { products } | ProductsState::Successful { products } => {
                products
            }
            _ => &[],
        }
    }

    /// True while a load or refresh is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(self, ProductsState::Loading | ProductsState::Refreshing { .. })
    }

    /// True once a load or refresh has settled.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            ProductsState::Successful { .. } | ProductsState::Error { .. }
        )
    }
}
