use std::env;
use crate::error::{EditError, Result};
use dotenvy::dotenv;

/// Default mosaic block edge, in pixels.
pub const DEFAULT_BLOCK_SIZE: u32 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub block_size: u32,
    pub export_name: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load .env file if it exists, ignore if it doesn't
        let _ = dotenv();

        let block_size = match env::var("RETOUCH_BLOCK_SIZE") {
            Ok(raw) => raw
                .parse::<u32>()
                .map_err(|_| EditError::config(format!("RETOUCH_BLOCK_SIZE is not a valid integer: {raw}")))?,
            Err(_) => DEFAULT_BLOCK_SIZE,
        };
        if block_size == 0 {
            return Err(EditError::config("RETOUCH_BLOCK_SIZE must be at least 1"));
        }

        let export_name =
            env::var("RETOUCH_EXPORT_NAME").unwrap_or_else(|_| "edited-image.png".to_string());

        Ok(Self {
            block_size,
            export_name,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            export_name: "edited-image.png".to_string(),
        }
    }
}
