//! User interface components for retouch.
//!
//! This module provides the interactive editor window: the current buffer
//! displayed to fit, pointer-drag region selection with a red frame, and a
//! toolbar driving the engine's mosaic/trim/undo/reset operations.
//!
//! # Architecture
//!
//! The UI is split into focused submodules:
//! - [`state`]: status line and session outcome types
//! - [`settings`]: user preferences and persistence
//! - [`rendering`]: drawing utilities for the overlay and frame
//! - [`selection`]: drag handling and coordinate mapping
//! - [`editor_app`]: main application logic
//!
//! # Usage
//!
//! ```ignore
//! use retouch_core::{ui, Config, ImageLoader};
//!
//! let config = Config::load()?;
//! let buffer = ImageLoader::open("photo.png")?;
//!
//! let outcome = ui::run_editor_ui(buffer, config)?;
//! if let Some(path) = outcome.saved_to {
//!     println!("saved to {}", path.display());
//! }
//! ```

mod editor_app;
mod rendering;
mod selection;
mod settings;
mod state;

// Public API exports
pub use editor_app::EditorApp;
pub use settings::Settings;
pub use state::{SessionOutcome, StatusLine};

use crate::config::Config;
use crate::error::Result;
use image::RgbaImage;

/// Launches the editor window over a decoded buffer.
///
/// Blocks until the user closes the window (or presses Escape), then
/// reports what the session produced.
///
/// # Arguments
/// * `buffer` - The decoded image to edit
/// * `config` - Application configuration (default block size, export name)
pub fn run_editor_ui(buffer: RgbaImage, config: Config) -> Result<SessionOutcome> {
    editor_app::run(buffer, config)
}
