//! Selection handling and coordinate mapping.
//!
//! This module contains logic for handling user selection drags and
//! mapping between display coordinates and buffer pixel coordinates.

use eframe::egui;

/// Minimum distance (in display pixels) for a drag to be considered a
/// valid selection rather than an accidental click.
pub const MIN_SELECTION_DISTANCE: f32 = 3.0;

/// Determines if a drag operation should be considered a valid selection.
pub fn is_valid_selection(start: egui::Pos2, end: egui::Pos2) -> bool {
    start.distance(end) > MIN_SELECTION_DISTANCE
}

/// Maps a display-space position to buffer pixel coordinates.
///
/// The image is shown fitted inside `image_rect`, which rarely matches the
/// buffer resolution, so both axes get their own scale factor — the same
/// correction the buffer coordinates would need for any display-scale
/// mismatch. The result may lie outside the buffer; normalization clamps
/// later.
pub fn display_to_buffer(
    pos: egui::Pos2,
    image_rect: egui::Rect,
    buffer_size: (u32, u32),
) -> (f32, f32) {
    let scale_x = buffer_size.0 as f32 / image_rect.width();
    let scale_y = buffer_size.1 as f32 / image_rect.height();
    (
        (pos.x - image_rect.min.x) * scale_x,
        (pos.y - image_rect.min.y) * scale_y,
    )
}

/// Result of processing selection input events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionEvent {
    /// User started a new selection drag.
    Started,
    /// User is actively dragging.
    Dragging,
    /// User completed a valid selection.
    Completed,
    /// User completed a drag but it was too small/invalid.
    Cancelled,
    /// No selection event occurred.
    None,
}

/// Processes drag events and returns the selection state change.
///
/// # Arguments
/// * `response` - The egui response from the interaction area
/// * `start` - Current selection start position (mutable)
/// * `current` - Current selection end position (mutable)
/// * `is_finalized` - Current finalized state
pub fn process_drag_event(
    response: &egui::Response,
    start: &mut Option<egui::Pos2>,
    current: &mut Option<egui::Pos2>,
    is_finalized: bool,
) -> SelectionEvent {
    if response.drag_started() {
        *start = response.interact_pointer_pos();
        *current = response.interact_pointer_pos();
        return SelectionEvent::Started;
    }

    if response.dragged() {
        *current = response.interact_pointer_pos();
        return SelectionEvent::Dragging;
    }

    if response.drag_stopped() && !is_finalized {
        if let (Some(s), Some(e)) = (*start, *current) {
            if is_valid_selection(s, e) {
                return SelectionEvent::Completed;
            } else {
                *start = None;
                *current = None;
                return SelectionEvent::Cancelled;
            }
        }
    }

    SelectionEvent::None
}
