//! Retouch Core Library
//!
//! This library provides the core functionality for the retouch image
//! editor: an in-memory pixel-buffer editing engine with rectangular
//! selection, block-pixelation ("mosaic"), cropping, undo and reset, plus
//! the file I/O and interactive selection UI wrapped around it.
//!
//! # Overview
//!
//! The user loads an image, drags a rectangle over it, and applies one of
//! two destructive operations to the selected region. The library handles:
//!
//! - **Editing Engine**: selection normalization, transforms and history
//!   via [`engine`], [`geometry`], [`transform`] and [`history`]
//! - **File I/O**: decoding and saving buffers via [`loader`]
//! - **User Interface**: the interactive editor window via [`ui`]
//!
//! # Quick Start
//!
//! The simplest way to use the library is through the [`Retouch`] facade:
//!
//! ```ignore
//! use retouch_core::Retouch;
//!
//! // Initialize with environment configuration
//! let app = Retouch::new()?;
//!
//! // Open a file and launch the interactive editor
//! app.run_interactive("photo.jpg")?;
//! ```
//!
//! Headless use goes straight to the engine:
//!
//! ```ignore
//! use retouch_core::{Editor, ImageLoader, RawSelection};
//!
//! let mut editor = Editor::new();
//! editor.load(ImageLoader::open("photo.jpg")?);
//! editor.set_selection(RawSelection::new((10.0, 10.0), (90.0, 60.0)))?;
//! editor.apply_mosaic(10)?;
//! ImageLoader::save("edited.png", editor.current().unwrap())?;
//! ```
//!
//! # Module Structure
//!
//! - [`engine`]: the edit engine state machine
//! - [`geometry`]: selection rectangles and normalization
//! - [`transform`]: the mosaic and crop transforms
//! - [`history`]: the undo snapshot stack
//! - [`loader`]: image file decode/encode
//! - [`config`]: configuration loading and management
//! - [`error`]: error types and result aliases
//! - [`ui`]: the interactive editor window

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod history;
pub mod loader;
pub mod transform;
pub mod ui;

// Re-export primary types for convenience
pub use config::Config;
pub use engine::Editor;
pub use error::{EditError, Result};
pub use geometry::{RawSelection, Region};
pub use loader::ImageLoader;

use image::RgbaImage;
use std::path::Path;

/// Main entry point for the retouch application.
///
/// This struct provides a facade over the engine, loader and UI,
/// handling initialization and orchestration. It's the recommended
/// way to use the library for most use cases.
///
/// # Example
///
/// ```ignore
/// use retouch_core::Retouch;
///
/// let app = Retouch::new()?;
/// app.run_interactive("screenshot.png")?;
/// ```
pub struct Retouch {
    config: Config,
}

impl Retouch {
    /// Creates a new Retouch instance with default configuration.
    ///
    /// Loads configuration from environment variables (including `.env`
    /// files).
    ///
    /// # Errors
    ///
    /// Returns an error if the environment holds an invalid value, such as
    /// a zero block size.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self { config })
    }

    /// Creates an instance with custom configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Decodes an image file without opening any UI.
    ///
    /// Useful for headless operation or when you want to drive the
    /// [`Editor`] programmatically.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<RgbaImage> {
        ImageLoader::open(path)
    }

    /// Opens a file and launches the interactive editor window.
    ///
    /// This is the main entry point for the visual editing workflow: the
    /// image is displayed, the user selects regions and applies mosaic or
    /// trim, with undo/reset and save available from the toolbar.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be decoded or the UI fails to
    /// initialize.
    pub fn run_interactive(&self, path: impl AsRef<Path>) -> Result<ui::SessionOutcome> {
        let buffer = ImageLoader::open(path)?;
        ui::run_editor_ui(buffer, self.config.clone())
    }

    /// Launches the interactive editor with an already-decoded buffer.
    ///
    /// Useful when the image came from somewhere other than a file, such
    /// as a prior headless edit.
    pub fn run_interactive_with_image(&self, buffer: RgbaImage) -> Result<ui::SessionOutcome> {
        ui::run_editor_ui(buffer, self.config.clone())
    }

    /// Returns a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a mutable reference to the configuration.
    ///
    /// Allows overriding settings like the block size after initialization.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}

/// Initializes the library by loading environment variables.
///
/// Call this once at application startup before using any other functions.
/// This loads `.env` files if present and sets up the environment.
pub fn init() {
    let _ = dotenvy::dotenv();
}
