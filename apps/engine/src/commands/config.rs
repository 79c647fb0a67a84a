//! # Config Commands
//!
//! Configuration retrieval for the frontend.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// Configuration is read-only after startup, so the response is simply
/// a copy of the state.
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
