use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FabIntent {
    BecomePrimary,
    BecomeSecondary,
}

impl Intent for FabIntent {}
