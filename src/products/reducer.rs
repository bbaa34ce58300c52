//! Reducer for the products list.

use crate::mvi::{Next, Reducer};
use crate::navigation::NavTarget;

use super::intent::{ProductsIntent, ProductsResponse};
use super::state::ProductsState;

/// Work the products reducer asks the effect handler to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductsEffect {
    InitializeSettings,
    /// Read products (cache first) and report `LoadFinished`.
    Fetch,
    /// Flush the cache, fetch, and report `RefreshFinished`.
    Refresh,
    Navigate(NavTarget),
}

pub struct ProductsReducer;

impl Reducer for ProductsReducer {
    type State = ProductsState;
    type Intent = ProductsIntent;
    type Effect = ProductsEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Next<Self::State, Self::Effect> {
        match intent {
            ProductsIntent::SettingsUninitialized => {
                Next::with_effect(state, ProductsEffect::InitializeSettings)
            }

            ProductsIntent::ProductsUninitialized | ProductsIntent::RetryProducts => {
                Next::with_effect(ProductsState::Loading, ProductsEffect::Fetch)
            }

            ProductsIntent::RefreshProducts => {
                let products = match state {
                    ProductsState::Successful { products }
                    | ProductsState::Refreshing { products } => products,
                    _ => Vec::new(),
                };
                Next::with_effect(ProductsState::Refreshing { products }, ProductsEffect::Refresh)
            }

            ProductsIntent::LoadFinished(response) | ProductsIntent::RefreshFinished(response) => {
                Next::state(from_response(response))
            }

            ProductsIntent::NavigateTo(target) => {
                Next::with_effect(state, ProductsEffect::Navigate(target))
            }
        }
    }
}

fn from_response(response: ProductsResponse) -> ProductsState {
    match response {
        ProductsResponse::Success(products) => ProductsState::Successful { products },
        ProductsResponse::Error(message) => ProductsState::Error { message },
    }
}
