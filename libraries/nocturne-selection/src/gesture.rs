//! Drag gesture tracking
//!
//! Converts absolute pointer positions into container-relative
//! percentage coordinates. The tracker holds nothing beyond the current
//! container measurement; move/end events belong to the machine.

use serde::{Deserialize, Serialize};

/// A pointer position in container-relative percentage coordinates.
///
/// Produced continuously during a drag; `x`/`y` are 0-100 when the
/// pointer is inside the container. The last sample of a drag decides
/// the selection zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Horizontal position as a percentage of container width
    pub x: f32,

    /// Vertical position as a percentage of container height
    pub y: f32,
}

/// Container measurement in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    width: f32,
    height: f32,
}

/// Converts drag pointer positions into [`PointerSample`]s.
///
/// The container must be measured before samples can be produced; until
/// then (or whenever the measurement is degenerate) samples are dropped
/// rather than producing NaN. This self-heals on the next valid
/// measurement.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureTracker {
    bounds: Option<Bounds>,
}

impl GestureTracker {
    /// Create a tracker with no container measurement yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Install or update the container measurement (pixels).
    ///
    /// Zero or non-finite dimensions are treated as "not yet laid out".
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
            self.bounds = Some(Bounds { width, height });
        } else {
            self.bounds = None;
        }
    }

    /// Forget the container measurement (e.g. container unmounted)
    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }

    /// Whether the tracker currently has a usable measurement
    pub fn is_measured(&self) -> bool {
        self.bounds.is_some()
    }

    /// Convert an absolute container-relative pixel position into a sample.
    ///
    /// Returns `None` (sample dropped) when no valid measurement is
    /// available.
    pub fn sample(&self, x_px: f32, y_px: f32) -> Option<PointerSample> {
        let bounds = self.bounds?;
        Some(PointerSample {
            x: (x_px / bounds.width) * 100.0,
            y: (y_px / bounds.height) * 100.0,
        })
    }
}
