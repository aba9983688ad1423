//! Display target configuration

use crate::display::DEFAULT_DISPLAY_ID;
use serde::{Deserialize, Serialize};

/// Terminal display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Identifier of the display target
    pub id: String,
    /// Clear the terminal before each update
    pub clear_screen: bool,
    /// Print an id/timestamp line above each update
    pub header: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_DISPLAY_ID.to_string(),
            clear_screen: true,
            header: true,
        }
    }
}
