//! Ambient helpers shared by the workspace: logging setup and environment loading.

pub mod env;
pub mod utils;
