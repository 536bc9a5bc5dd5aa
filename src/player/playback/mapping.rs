//! Conversion between timeline time and on-screen position.
//!
//! The same mapping is used to place cut markers, to draw the play-head, and
//! to turn a pointer offset into a scrub target.

/// Pointer position relative to the left edge of the timeline widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerOffset {
    /// Distance from the timeline's left edge
    pub offset: f64,
    /// Length of the timeline along the same axis
    pub extent: f64,
}

impl PointerOffset {
    pub fn new(offset: f64, extent: f64) -> Self {
        Self { offset, extent }
    }

    /// Pointer offset for a terminal column inside a timeline that starts at
    /// `left` and spans `width` columns.
    ///
    /// The last column maps to the end of the timeline.
    pub fn from_column(column: u16, left: u16, width: u16) -> Self {
        let right_edge = left.saturating_add(width.saturating_sub(1));
        let clamped = column.clamp(left, right_edge.max(left));
        let rel = clamped.saturating_sub(left) as f64;
        let extent = width.saturating_sub(1).max(1) as f64;
        Self::new(rel, extent)
    }

    /// Normalized position in `[0, 1]`; zero for a degenerate extent.
    pub fn fraction(&self) -> f64 {
        if !(self.extent > 0.0) || self.offset.is_nan() {
            return 0.0;
        }
        (self.offset / self.extent).clamp(0.0, 1.0)
    }
}

/// Map a time to its fraction of the timeline, clamped to `[0, 1]`.
///
/// Returns 0 when the duration is zero, negative, or not a number.
#[inline]
pub fn to_fraction(time: f64, duration: f64) -> f64 {
    if !(duration > 0.0) || !duration.is_finite() || time.is_nan() {
        return 0.0;
    }
    (time / duration).clamp(0.0, 1.0)
}

/// Map a timeline fraction back to a time.
#[inline]
pub fn to_time(fraction: f64, duration: f64) -> f64 {
    if !(duration > 0.0) || fraction.is_nan() {
        return 0.0;
    }
    fraction * duration
}

/// Clamp a time into `[0, duration]`.
#[inline]
pub fn clamp_time(time: f64, duration: f64) -> f64 {
    if time.is_nan() {
        return 0.0;
    }
    time.clamp(0.0, duration.max(0.0))
}

/// Scrub target for a pointer offset.
pub fn pointer_to_time(pointer: PointerOffset, duration: f64) -> f64 {
    clamp_time(to_time(pointer.fraction(), duration), duration)
}

/// Column index (within `width` cells) where `time` is drawn.
///
/// The end of the timeline lands on the last column.
pub fn time_to_column(time: f64, duration: f64, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let last = (width - 1) as f64;
    (to_fraction(time, duration) * last).round() as u16
}

/// Time range `[from, to)` covered by a column, the inverse of [`time_to_column`].
pub fn column_span(column: u16, duration: f64, width: u16) -> (f64, f64) {
    if width <= 1 || !(duration > 0.0) {
        return (0.0, duration.max(0.0));
    }
    let step = duration / (width - 1) as f64;
    let center = column as f64 * step;
    (
        clamp_time(center - step / 2.0, duration),
        clamp_time(center + step / 2.0, duration),
    )
}
