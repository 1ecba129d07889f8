//! Feature modules: per-area state, actions, and API glue.

pub mod library;
