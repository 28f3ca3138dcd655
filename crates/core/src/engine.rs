//! The image edit engine.
//!
//! [`Editor`] owns the authoritative pixel buffer, the pending selection
//! and the undo history, and is the only place state transitions happen.
//! Every operation is synchronous and either fully completes, publishing a
//! new buffer, or fully declines with a benign [`EditError`] — the current
//! buffer is never left half-written.
//!
//! Transforms run on a borrowed buffer and return a fresh one, so a
//! snapshot taken before an edit can never be invalidated by that edit.

use crate::error::{EditError, Result};
use crate::geometry::{RawSelection, Region};
use crate::history::EditHistory;
use crate::transform;
use image::RgbaImage;

/// State that only exists while an image is loaded.
struct Session {
    current: RgbaImage,
    history: EditHistory,
    selection: Option<RawSelection>,
}

/// The image edit engine: current buffer, selection and history.
///
/// Created empty; every editing operation is rejected with
/// [`EditError::NotLoaded`] (or [`EditError::NoOriginal`] for reset) until
/// [`Editor::load`] is called.
#[derive(Default)]
pub struct Editor {
    session: Option<Session>,
    /// Bumped every time `current` is replaced. Lets a renderer cache its
    /// texture and re-upload only when the buffer actually changed.
    revision: u64,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a decoded image, becoming the new original.
    ///
    /// Replaces any previous session entirely: the old original, history
    /// and selection are all discarded.
    pub fn load(&mut self, buffer: RgbaImage) {
        self.session = Some(Session {
            current: buffer.clone(),
            history: EditHistory::new(buffer),
            selection: None,
        });
        self.revision += 1;
    }

    /// Whether an image is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.session.is_some()
    }

    /// The authoritative buffer, if an image is loaded.
    pub fn current(&self) -> Option<&RgbaImage> {
        self.session.as_ref().map(|s| &s.current)
    }

    /// Dimensions of the current buffer.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.current().map(|b| b.dimensions())
    }

    /// Monotonic counter identifying the current buffer contents.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of undoable edits.
    pub fn history_depth(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.history.depth())
    }

    /// Sets the pending selection from two raw corner points in buffer
    /// coordinates. The points may be inverted or out of bounds; they are
    /// normalized when a transform runs.
    pub fn set_selection(&mut self, selection: RawSelection) -> Result<()> {
        let session = self.session.as_mut().ok_or(EditError::NotLoaded)?;
        session.selection = Some(selection);
        Ok(())
    }

    /// Drops the pending selection, if any.
    pub fn clear_selection(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.selection = None;
        }
    }

    /// The pending selection, if any.
    pub fn selection(&self) -> Option<RawSelection> {
        self.session.as_ref().and_then(|s| s.selection)
    }

    /// The pending selection normalized against the current buffer.
    pub fn normalized_selection(&self) -> Option<Region> {
        let session = self.session.as_ref()?;
        let (w, h) = session.current.dimensions();
        session.selection.map(|sel| sel.normalize(w, h))
    }

    /// Pixelates the selected region with the given block size.
    ///
    /// Snapshots the current buffer, then publishes the transformed one.
    /// Dimensions are unchanged and the selection stays pending, so the
    /// same region can be mosaicked again at a different block size.
    pub fn apply_mosaic(&mut self, block_size: u32) -> Result<()> {
        let session = self.session.as_mut().ok_or(EditError::NotLoaded)?;
        let region = accepted_region(session)?;

        session.history.snapshot(&session.current);
        session.current = transform::mosaic(&session.current, region, block_size);
        self.revision += 1;
        Ok(())
    }

    /// Crops the buffer down to the selected region.
    ///
    /// The buffer dimensions change, so the pending selection is cleared —
    /// it was expressed against coordinates that no longer exist.
    pub fn apply_crop(&mut self) -> Result<()> {
        let session = self.session.as_mut().ok_or(EditError::NotLoaded)?;
        let region = accepted_region(session)?;

        session.history.snapshot(&session.current);
        session.current = transform::crop(&session.current, region);
        session.selection = None;
        self.revision += 1;
        Ok(())
    }

    /// Restores the buffer from before the most recent accepted edit.
    pub fn undo(&mut self) -> Result<()> {
        let session = self.session.as_mut().ok_or(EditError::NotLoaded)?;
        let previous = session.history.undo().ok_or(EditError::EmptyHistory)?;
        session.current = previous;
        session.selection = None;
        self.revision += 1;
        Ok(())
    }

    /// Restores the originally loaded buffer and clears the history.
    pub fn reset(&mut self) -> Result<()> {
        let session = self.session.as_mut().ok_or(EditError::NoOriginal)?;
        session.current = session.history.reset();
        session.selection = None;
        self.revision += 1;
        Ok(())
    }
}

/// Normalizes the pending selection and rejects the degenerate cases
/// before any snapshot is taken, so history never records a no-op.
fn accepted_region(session: &Session) -> Result<Region> {
    let selection = session.selection.ok_or(EditError::DegenerateSelection)?;
    let (w, h) = session.current.dimensions();
    let region = selection.normalize(w, h);
    if region.is_degenerate() {
        return Err(EditError::DegenerateSelection);
    }
    Ok(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn checkerboard(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        })
    }

    fn select(editor: &mut Editor, start: (f32, f32), end: (f32, f32)) {
        editor.set_selection(RawSelection::new(start, end)).unwrap();
    }

    #[test]
    fn operations_before_load_are_rejected() {
        let mut editor = Editor::new();
        assert!(matches!(
            editor.set_selection(RawSelection::new((0.0, 0.0), (5.0, 5.0))),
            Err(EditError::NotLoaded)
        ));
        assert!(matches!(editor.apply_mosaic(10), Err(EditError::NotLoaded)));
        assert!(matches!(editor.apply_crop(), Err(EditError::NotLoaded)));
        assert!(matches!(editor.undo(), Err(EditError::NotLoaded)));
        assert!(matches!(editor.reset(), Err(EditError::NoOriginal)));
        assert!(editor.current().is_none());
    }

    #[test]
    fn mosaic_quadrant_then_undo_restores_checkerboard() {
        let board = checkerboard(20, 20);
        let mut editor = Editor::new();
        editor.load(board.clone());

        select(&mut editor, (0.0, 0.0), (10.0, 10.0));
        editor.apply_mosaic(10).unwrap();

        let current = editor.current().unwrap();
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(current.get_pixel(x, y), &Rgba([127, 127, 127, 255]));
            }
        }
        assert_eq!(current.get_pixel(15, 15), board.get_pixel(15, 15));
        assert_eq!(editor.history_depth(), 1);

        editor.undo().unwrap();
        assert_eq!(editor.current().unwrap().as_raw(), board.as_raw());
        assert_eq!(editor.history_depth(), 0);
    }

    #[test]
    fn out_of_bounds_selection_declines_without_history_entry() {
        let mut editor = Editor::new();
        editor.load(RgbaImage::from_pixel(100, 100, Rgba([9, 9, 9, 255])));

        select(&mut editor, (150.0, 150.0), (200.0, 200.0));
        assert!(matches!(
            editor.apply_mosaic(10),
            Err(EditError::DegenerateSelection)
        ));
        assert!(matches!(
            editor.apply_crop(),
            Err(EditError::DegenerateSelection)
        ));
        assert_eq!(editor.history_depth(), 0);
        assert_eq!(editor.dimensions(), Some((100, 100)));
    }

    #[test]
    fn transform_without_selection_is_degenerate() {
        let mut editor = Editor::new();
        editor.load(checkerboard(8, 8));
        assert!(matches!(
            editor.apply_mosaic(4),
            Err(EditError::DegenerateSelection)
        ));
        assert_eq!(editor.history_depth(), 0);
    }

    #[test]
    fn crop_changes_dimensions_and_clears_selection() {
        let mut editor = Editor::new();
        editor.load(checkerboard(30, 30));

        select(&mut editor, (25.0, 20.0), (5.0, 8.0));
        editor.apply_crop().unwrap();

        assert_eq!(editor.dimensions(), Some((20, 12)));
        assert!(editor.selection().is_none());
        assert_eq!(editor.history_depth(), 1);

        editor.undo().unwrap();
        assert_eq!(editor.dimensions(), Some((30, 30)));
    }

    #[test]
    fn edit_sequence_round_trips_through_undo() {
        let board = checkerboard(24, 24);
        let mut editor = Editor::new();
        editor.load(board.clone());

        select(&mut editor, (2.0, 2.0), (14.0, 14.0));
        editor.apply_mosaic(5).unwrap();
        select(&mut editor, (4.0, 4.0), (20.0, 18.0));
        editor.apply_crop().unwrap();
        select(&mut editor, (0.0, 0.0), (8.0, 8.0));
        editor.apply_mosaic(3).unwrap();
        assert_eq!(editor.history_depth(), 3);

        editor.undo().unwrap();
        editor.undo().unwrap();
        editor.undo().unwrap();
        assert_eq!(editor.current().unwrap().as_raw(), board.as_raw());
        assert!(matches!(editor.undo(), Err(EditError::EmptyHistory)));
    }

    #[test]
    fn reset_is_idempotent() {
        let board = checkerboard(16, 16);
        let mut editor = Editor::new();
        editor.load(board.clone());

        select(&mut editor, (0.0, 0.0), (16.0, 16.0));
        editor.apply_mosaic(4).unwrap();
        select(&mut editor, (1.0, 1.0), (9.0, 9.0));
        editor.apply_crop().unwrap();

        editor.reset().unwrap();
        assert_eq!(editor.current().unwrap().as_raw(), board.as_raw());
        assert_eq!(editor.history_depth(), 0);

        editor.reset().unwrap();
        assert_eq!(editor.current().unwrap().as_raw(), board.as_raw());
        assert_eq!(editor.history_depth(), 0);
    }

    #[test]
    fn mosaic_keeps_selection_pending() {
        let mut editor = Editor::new();
        editor.load(checkerboard(12, 12));

        select(&mut editor, (0.0, 0.0), (6.0, 6.0));
        editor.apply_mosaic(2).unwrap();
        assert!(editor.selection().is_some());

        // Same region again with a different block size is accepted.
        editor.apply_mosaic(3).unwrap();
        assert_eq!(editor.history_depth(), 2);
    }

    #[test]
    fn load_replaces_original_and_clears_history() {
        let mut editor = Editor::new();
        editor.load(checkerboard(10, 10));
        select(&mut editor, (0.0, 0.0), (5.0, 5.0));
        editor.apply_mosaic(5).unwrap();

        let replacement = RgbaImage::from_pixel(6, 6, Rgba([1, 2, 3, 255]));
        editor.load(replacement.clone());
        assert_eq!(editor.history_depth(), 0);
        assert!(matches!(editor.undo(), Err(EditError::EmptyHistory)));

        editor.reset().unwrap();
        assert_eq!(editor.current().unwrap().as_raw(), replacement.as_raw());
    }

    #[test]
    fn revision_advances_only_on_published_buffers() {
        let mut editor = Editor::new();
        editor.load(checkerboard(10, 10));
        let after_load = editor.revision();

        assert!(editor.apply_mosaic(5).is_err());
        assert_eq!(editor.revision(), after_load);

        select(&mut editor, (0.0, 0.0), (5.0, 5.0));
        editor.apply_mosaic(5).unwrap();
        assert!(editor.revision() > after_load);
    }
}
