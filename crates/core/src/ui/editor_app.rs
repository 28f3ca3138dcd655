//! Main editor application window.
//!
//! This module contains the `EditorApp` struct which implements the
//! `eframe::App` trait: the displayed buffer, the drag selection, the
//! toolbar and the status line.

use super::rendering::{draw_selection_border, draw_selection_overlay, fit_rect};
use super::selection::{display_to_buffer, process_drag_event, SelectionEvent};
use super::settings::Settings;
use super::state::{SessionOutcome, StatusLine};
use crate::config::Config;
use crate::engine::Editor;
use crate::error::{EditError, Result};
use crate::geometry::RawSelection;
use crate::loader::ImageLoader;
use eframe::egui;
use image::RgbaImage;
use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Alpha for the dimmed surround outside an active selection.
const OVERLAY_ALPHA: u8 = 120;

/// The interactive editor window.
///
/// Owns the [`Editor`] engine and translates pointer and toolbar input
/// into engine operations. Declined operations surface on the status line;
/// nothing here panics on a benign error.
pub struct EditorApp {
    // Engine state
    editor: Editor,
    config: Config,

    // Displayed texture, re-uploaded whenever the engine publishes a new
    // buffer revision
    texture: Option<egui::TextureHandle>,
    texture_revision: u64,

    // Selection drag state, in display coordinates
    selection_start: Option<egui::Pos2>,
    current_pos: Option<egui::Pos2>,
    is_selection_finalized: bool,

    // Feedback
    status: StatusLine,
    pub outcome: Arc<Mutex<SessionOutcome>>,

    // Settings
    settings: Settings,
    show_settings: bool,
}

impl EditorApp {
    /// Creates the editor window state around an already-decoded buffer.
    ///
    /// # Arguments
    /// * `buffer` - The loaded image
    /// * `outcome` - Shared outcome container for returning results to the caller
    /// * `config` - Application configuration
    pub fn new(buffer: RgbaImage, outcome: Arc<Mutex<SessionOutcome>>, config: Config) -> Self {
        let mut editor = Editor::new();
        editor.load(buffer);

        let settings = Settings::load(config.block_size);

        Self {
            editor,
            config,
            texture: None,
            texture_revision: 0,
            selection_start: None,
            current_pos: None,
            is_selection_finalized: false,
            status: StatusLine::Ready,
            outcome,
            settings,
            show_settings: false,
        }
    }

    /// Re-uploads the buffer texture if the engine published a new one.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        if self.texture.is_some() && self.texture_revision == self.editor.revision() {
            return;
        }
        if let Some(buffer) = self.editor.current() {
            let size = [buffer.width() as usize, buffer.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, buffer.as_raw());
            self.texture = Some(ctx.load_texture(
                "edited-buffer",
                color_image,
                egui::TextureOptions::NEAREST,
            ));
            self.texture_revision = self.editor.revision();
        }
    }

    fn clear_drag(&mut self) {
        self.selection_start = None;
        self.current_pos = None;
        self.is_selection_finalized = false;
    }

    fn record_edit(&mut self) {
        if let Ok(mut outcome) = self.outcome.lock() {
            outcome.edits_applied += 1;
        }
    }

    fn on_mosaic(&mut self) {
        // Persist the block size the edit is about to use
        if let Err(e) = self.settings.save() {
            eprintln!("Warning: Failed to save settings: {}", e);
        }

        match self.editor.apply_mosaic(self.settings.block_size) {
            Ok(()) => {
                self.record_edit();
                self.status =
                    StatusLine::info(format!("Mosaic applied (block {})", self.settings.block_size));
            }
            Err(e) => self.status = StatusLine::error(e.to_string()),
        }
    }

    fn on_trim(&mut self) {
        match self.editor.apply_crop() {
            Ok(()) => {
                self.record_edit();
                // The old selection coordinates no longer exist
                self.clear_drag();
                let (w, h) = self.editor.dimensions().unwrap_or_default();
                self.status = StatusLine::info(format!("Trimmed to {}x{}", w, h));
            }
            Err(e) => self.status = StatusLine::error(e.to_string()),
        }
    }

    fn on_undo(&mut self) {
        match self.editor.undo() {
            Ok(()) => {
                self.clear_drag();
                self.status = StatusLine::info("Undid last edit");
            }
            Err(e) => self.status = StatusLine::error(e.to_string()),
        }
    }

    fn on_reset(&mut self) {
        match self.editor.reset() {
            Ok(()) => {
                self.clear_drag();
                self.status = StatusLine::info("Restored original image");
            }
            Err(e) => self.status = StatusLine::error(e.to_string()),
        }
    }

    fn on_save(&mut self) {
        match self.save_current() {
            Ok(path) => {
                self.status = StatusLine::info(format!("Saved to {}", path.display()));
                if let Ok(mut outcome) = self.outcome.lock() {
                    outcome.saved_to = Some(path);
                }
            }
            Err(e) => self.status = StatusLine::error(e.to_string()),
        }
    }

    fn save_current(&self) -> Result<PathBuf> {
        let buffer = self.editor.current().ok_or(EditError::NotLoaded)?;
        let path = PathBuf::from(&self.config.export_name);
        ImageLoader::save(&path, buffer)?;
        Ok(path)
    }

    fn on_copy(&mut self) {
        let Some(buffer) = self.editor.current() else {
            self.status = StatusLine::error(EditError::NotLoaded.to_string());
            return;
        };
        let image_data = arboard::ImageData {
            width: buffer.width() as usize,
            height: buffer.height() as usize,
            bytes: Cow::Borrowed(buffer.as_raw()),
        };
        match arboard::Clipboard::new().and_then(|mut c| c.set_image(image_data)) {
            Ok(()) => self.status = StatusLine::info("Copied image to clipboard"),
            Err(e) => self.status = StatusLine::error(format!("Clipboard error: {}", e)),
        }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Mosaic").clicked() {
                self.on_mosaic();
            }
            if ui.button("Trim").clicked() {
                self.on_trim();
            }
            ui.separator();
            if ui.button("Undo").clicked() {
                self.on_undo();
            }
            if ui.button("Reset").clicked() {
                self.on_reset();
            }
            ui.separator();
            if ui.button("Save").clicked() {
                self.on_save();
            }
            if ui.button("Copy").clicked() {
                self.on_copy();
            }
            if ui.button("⚙").clicked() {
                self.show_settings = !self.show_settings;
            }
        });

        if self.show_settings {
            self.render_settings_ui(ui);
        }
    }

    /// Renders the settings panel.
    fn render_settings_ui(&mut self, ui: &mut egui::Ui) {
        ui.separator();
        ui.horizontal(|ui| {
            ui.label("Block size:");
            ui.add(egui::Slider::new(&mut self.settings.block_size, 1..=64));
        });
        ui.checkbox(&mut self.settings.dim_overlay, "Dim outside selection");
    }

    fn render_status_line(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            match &self.status {
                StatusLine::Ready => {
                    ui.label("Drag to select a region");
                }
                StatusLine::Info(msg) => {
                    ui.label(msg);
                }
                StatusLine::Error(msg) => {
                    ui.label(egui::RichText::new(msg).color(egui::Color32::RED));
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some((w, h)) = self.editor.dimensions() {
                    ui.label(format!("{}x{}", w, h));
                }
                ui.label(format!("edits: {}", self.editor.history_depth()));
                if let Some(region) = self.editor.normalized_selection() {
                    if !region.is_degenerate() {
                        ui.label(format!("sel: {}x{}", region.width, region.height));
                    }
                }
            });
        });
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Enforce dark mode
        ctx.set_visuals(egui::Visuals::dark());

        self.sync_texture(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.render_toolbar(ui);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.render_status_line(ui);
        });

        // Canvas panel with no margins
        let panel_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(0))
            .outer_margin(egui::Margin::same(0));

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let Some(buffer_size) = self.editor.dimensions() else {
                    return;
                };
                let image_rect = fit_rect(rect, buffer_size);

                // Draw the current buffer
                if let Some(texture) = &self.texture {
                    ui.painter().image(
                        texture.id(),
                        image_rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }

                // Handle selection input
                let response = ui.interact(image_rect, ui.id().with("canvas"), egui::Sense::drag());
                let event = process_drag_event(
                    &response,
                    &mut self.selection_start,
                    &mut self.current_pos,
                    self.is_selection_finalized,
                );

                match event {
                    SelectionEvent::Started => {
                        self.is_selection_finalized = false;
                        self.editor.clear_selection();
                        self.status = StatusLine::Ready;
                    }
                    SelectionEvent::Completed => {
                        self.is_selection_finalized = true;
                        if let (Some(start), Some(end)) = (self.selection_start, self.current_pos)
                        {
                            let raw = RawSelection::new(
                                display_to_buffer(start, image_rect, buffer_size),
                                display_to_buffer(end, image_rect, buffer_size),
                            );
                            if let Err(e) = self.editor.set_selection(raw) {
                                self.status = StatusLine::error(e.to_string());
                            }
                        }
                    }
                    SelectionEvent::Cancelled => {
                        self.editor.clear_selection();
                    }
                    _ => {}
                }

                // Handle escape to close
                if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }

                // Draw the selection frame over the image
                let current_interaction_pos = if self.is_selection_finalized {
                    self.current_pos
                } else {
                    ctx.pointer_interact_pos().or(self.current_pos)
                };

                if let (Some(start), Some(current)) = (self.selection_start, current_interaction_pos)
                {
                    let selection_rect = egui::Rect::from_two_pos(start, current);

                    if self.settings.dim_overlay {
                        draw_selection_overlay(
                            ui.painter(),
                            image_rect,
                            selection_rect,
                            OVERLAY_ALPHA,
                        );
                    }
                    draw_selection_border(ui.painter(), selection_rect, 2.0, egui::Color32::RED);
                }
            });
    }
}

/// Launches the editor window and blocks until the user closes it.
///
/// # Arguments
/// * `buffer` - The decoded image to edit
/// * `config` - Application configuration
///
/// # Returns
/// What the session produced: last save path and edit count.
pub fn run(buffer: RgbaImage, config: Config) -> Result<SessionOutcome> {
    let (w, h) = buffer.dimensions();
    let inner_size = egui::vec2(
        (w as f32).clamp(480.0, 1280.0),
        (h as f32 + 64.0).clamp(360.0, 800.0),
    );
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(inner_size),
        ..Default::default()
    };

    let outcome = Arc::new(Mutex::new(SessionOutcome::default()));
    let app_outcome = outcome.clone();

    eframe::run_native(
        "Retouch",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(EditorApp::new(buffer, app_outcome, config)) as Box<dyn eframe::App>)
        }),
    )
    .map_err(|e| EditError::ui(format!("Failed to run UI: {}", e)))?;

    // Extract outcome from shared state
    let lock = outcome
        .lock()
        .map_err(|_| EditError::ui("Failed to acquire outcome lock"))?;
    Ok(lock.clone())
}
