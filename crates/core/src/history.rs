//! Undo history for buffer snapshots.
//!
//! Whole-buffer snapshots on a LIFO stack, plus the original buffer
//! captured once at load time. The stack only ever records accepted edits:
//! the engine pushes immediately before a transform is applied and never
//! for a declined one, so stack depth always equals the number of edits
//! since the last load or reset.

use image::RgbaImage;

/// Snapshot stack for a loaded image.
pub struct EditHistory {
    /// The buffer as it was when the image was loaded. Never mutated;
    /// replaced only by loading a new image.
    original: RgbaImage,
    /// Snapshots of the current buffer, most recent last.
    stack: Vec<RgbaImage>,
}

impl EditHistory {
    /// Starts a fresh history for a newly loaded image.
    pub fn new(original: RgbaImage) -> Self {
        Self {
            original,
            stack: Vec::new(),
        }
    }

    /// Records the current buffer before a destructive edit.
    pub fn snapshot(&mut self, current: &RgbaImage) {
        self.stack.push(current.clone());
    }

    /// Pops the most recent snapshot, or `None` if no edits were recorded.
    pub fn undo(&mut self) -> Option<RgbaImage> {
        self.stack.pop()
    }

    /// Clears all snapshots and returns a copy of the original buffer.
    pub fn reset(&mut self) -> RgbaImage {
        self.stack.clear();
        self.original.clone()
    }

    /// Number of recorded edits since load or the last reset.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// The originally loaded buffer.
    pub fn original(&self) -> &RgbaImage {
        &self.original
    }
}
