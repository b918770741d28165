//! Command implementations for dilu CLI

pub mod completions;
pub mod split;
pub mod version;
