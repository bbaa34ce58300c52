use std::convert::Infallible;

use crate::mvi::{Next, Reducer};

use super::intent::FabIntent;
use super::state::FabState;

pub struct FabReducer;

impl Reducer for FabReducer {
    type State = FabState;
    type Intent = FabIntent;
    type Effect = Infallible;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Next<Self::State, Self::Effect> {
        match intent {
            FabIntent::BecomePrimary => Next::state(FabState::Primary),
            FabIntent::BecomeSecondary => Next::state(FabState::Secondary),
        }
    }
}
