//! UI rendering helpers for the editor canvas.
//!
//! This module contains reusable rendering functions: fitting the buffer
//! into the window, the dimmed surround outside the selection, and the red
//! selection frame.

use eframe::egui;

/// Computes the largest rectangle inside `container` that shows the buffer
/// at its own aspect ratio, centered.
pub fn fit_rect(container: egui::Rect, buffer_size: (u32, u32)) -> egui::Rect {
    let (bw, bh) = (buffer_size.0 as f32, buffer_size.1 as f32);
    if bw <= 0.0 || bh <= 0.0 {
        return egui::Rect::from_min_size(container.min, egui::Vec2::ZERO);
    }

    let scale = (container.width() / bw).min(container.height() / bh);
    let size = egui::vec2(bw * scale, bh * scale);
    egui::Rect::from_center_size(container.center(), size)
}

/// Draws a dark overlay over the displayed image with a clear "cutout"
/// for the selection area, so the region about to be edited stands out.
///
/// # Arguments
/// * `painter` - The egui painter to draw with
/// * `image_rect` - The rectangle the image occupies on screen
/// * `selection_rect` - The selected area to keep clear
/// * `alpha` - Darkness level (0-255, higher = darker)
pub fn draw_selection_overlay(
    painter: &egui::Painter,
    image_rect: egui::Rect,
    selection_rect: egui::Rect,
    alpha: u8,
) {
    let color = egui::Color32::from_black_alpha(alpha);
    let selection_rect = selection_rect.intersect(image_rect);

    // Top region (above selection)
    painter.rect_filled(
        egui::Rect::from_min_max(
            image_rect.min,
            egui::pos2(image_rect.max.x, selection_rect.min.y),
        ),
        0.0,
        color,
    );

    // Bottom region (below selection)
    painter.rect_filled(
        egui::Rect::from_min_max(
            egui::pos2(image_rect.min.x, selection_rect.max.y),
            image_rect.max,
        ),
        0.0,
        color,
    );

    // Left region (left of selection, between top and bottom)
    painter.rect_filled(
        egui::Rect::from_min_max(
            egui::pos2(image_rect.min.x, selection_rect.min.y),
            egui::pos2(selection_rect.min.x, selection_rect.max.y),
        ),
        0.0,
        color,
    );

    // Right region (right of selection, between top and bottom)
    painter.rect_filled(
        egui::Rect::from_min_max(
            egui::pos2(selection_rect.max.x, selection_rect.min.y),
            egui::pos2(image_rect.max.x, selection_rect.max.y),
        ),
        0.0,
        color,
    );
}

/// Draws the red frame around the selection rectangle.
pub fn draw_selection_border(
    painter: &egui::Painter,
    selection_rect: egui::Rect,
    stroke_width: f32,
    color: egui::Color32,
) {
    painter.rect_stroke(
        selection_rect,
        0.0,
        egui::Stroke::new(stroke_width, color),
        egui::StrokeKind::Middle,
    );
}
