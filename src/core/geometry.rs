//! Track geometry.
//!
//! The host measures the rendered track and handle and hands the numbers
//! over; nothing here touches a rendering surface.

use serde::{Deserialize, Serialize};

/// Measured layout of the slider track, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackLayout {
    /// Left edge of the track in pointer coordinates.
    pub track_left: f64,
    pub track_width: f64,
    pub handle_width: f64,
}

impl TrackLayout {
    pub fn new(track_left: f64, track_width: f64, handle_width: f64) -> Self {
        Self {
            track_left,
            track_width,
            handle_width,
        }
    }

    /// A track of `track_width` starting at the origin.
    pub fn with_widths(track_width: f64, handle_width: f64) -> Self {
        Self::new(0.0, track_width, handle_width)
    }

    /// Resting offset for a non-affirmative state.
    pub fn start_offset(&self) -> f64 {
        0.0
    }

    /// Resting offset for an affirmative state.
    pub fn end_offset(&self) -> f64 {
        self.max_offset_for(self.handle_width)
    }

    /// True when the track has no measurable width yet.
    pub fn is_collapsed(&self) -> bool {
        self.track_width.is_nan() || self.track_width <= 0.0
    }

    /// Handle offset under `pointer_x`, centred on the pointer and clamped
    /// to the track.
    pub fn offset_for_pointer(&self, pointer_x: f64) -> f64 {
        self.offset_for_pointer_with(pointer_x, self.handle_width)
    }

    /// Same as [`offset_for_pointer`](Self::offset_for_pointer) with an
    /// explicitly measured handle width.
    pub fn offset_for_pointer_with(&self, pointer_x: f64, handle_width: f64) -> f64 {
        let candidate = pointer_x - self.track_left - handle_width / 2.0;
        self.clamp_with(candidate, handle_width)
    }

    pub fn clamp(&self, offset: f64) -> f64 {
        self.clamp_with(offset, self.handle_width)
    }

    fn clamp_with(&self, offset: f64, handle_width: f64) -> f64 {
        let max = self.max_offset_for(handle_width);
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, max)
    }

    /// Largest offset a handle `handle_width` wide can take on this track.
    pub(crate) fn max_offset_for(&self, handle_width: f64) -> f64 {
        let max = self.track_width - handle_width;
        if max.is_finite() && max > 0.0 {
            max
        } else {
            0.0
        }
    }
}
