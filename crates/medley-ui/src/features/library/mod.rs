//! Media library feature: list state, user actions, and API glue.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod state;
