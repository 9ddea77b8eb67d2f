use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{
    Drawport, LineSegment, ViewWindow, Viewport, min_handle_gap_px, min_span_indices,
    pixel_to_index,
};

pub const DEFAULT_TOUCH_TOLERANCE_PX: f64 = 16.0;
pub const DEFAULT_FRAME_THICKNESS_PX: f64 = 3.0;
pub const DEFAULT_HANDLE_WIDTH_PX: f64 = DEFAULT_FRAME_THICKNESS_PX * 4.0;

/// Which region wins when handle and band hit areas overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HitPriority {
    /// Nearest handle first, then the band interior.
    #[default]
    EdgeFirst,
    /// Band interior, then right handle, then left handle.
    BandFirst,
}

/// Region of the overview selection hit by a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitRegion {
    LeftHandle,
    RightHandle,
    Band,
}

/// Drag state of the overview selection.
///
/// `last_x` is the pointer position seen by the previous event of the drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingLeftHandle { last_x: f64 },
    DraggingRightHandle { last_x: f64 },
    DraggingBand { last_x: f64 },
}

impl DragState {
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    fn last_x(self) -> Option<f64> {
        match self {
            Self::Idle => None,
            Self::DraggingLeftHandle { last_x }
            | Self::DraggingRightHandle { last_x }
            | Self::DraggingBand { last_x } => Some(last_x),
        }
    }

    fn with_last_x(self, x: f64) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::DraggingLeftHandle { .. } => Self::DraggingLeftHandle { last_x: x },
            Self::DraggingRightHandle { .. } => Self::DraggingRightHandle { last_x: x },
            Self::DraggingBand { .. } => Self::DraggingBand { last_x: x },
        }
    }
}

/// Tuning for selector hit testing and handle drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSelectorConfig {
    pub touch_tolerance_px: f64,
    pub hit_priority: HitPriority,
    pub frame_thickness_px: f64,
    pub handle_width_px: f64,
}

impl Default for RangeSelectorConfig {
    fn default() -> Self {
        Self {
            touch_tolerance_px: DEFAULT_TOUCH_TOLERANCE_PX,
            hit_priority: HitPriority::EdgeFirst,
            frame_thickness_px: DEFAULT_FRAME_THICKNESS_PX,
            handle_width_px: DEFAULT_HANDLE_WIDTH_PX,
        }
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Overview geometry of the current selection, in host pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionOverlay {
    pub unselected_left: PixelRect,
    pub unselected_right: PixelRect,
    /// Top and bottom edges of the selection frame.
    pub frame_lines: [LineSegment; 2],
    /// Left and right handle bars.
    pub handle_lines: [LineSegment; 2],
    pub frame_thickness_px: f64,
    pub handle_width_px: f64,
}

/// Owns the selected window of the overview strip and the drag state
/// machine that moves it.
///
/// The window is kept as two pixel edges in overview-local space; sample
/// indices are derived from them after every accepted change.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSelector {
    len: usize,
    width: f64,
    height: f64,
    config: RangeSelectorConfig,
    left_px: f64,
    right_px: f64,
    window: ViewWindow,
    state: DragState,
}

impl RangeSelector {
    /// Creates a selector covering the full dataset of `len` samples.
    #[must_use]
    pub fn new(len: usize, viewport: Viewport, config: RangeSelectorConfig) -> Self {
        let width = f64::from(viewport.width);
        Self {
            len,
            width,
            height: f64::from(viewport.height),
            config,
            left_px: 0.0,
            right_px: width,
            window: ViewWindow::full(len),
            state: DragState::Idle,
        }
    }

    /// Datasets with fewer than two samples have nothing to select.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.len > 1
    }

    #[must_use]
    pub fn window(&self) -> ViewWindow {
        self.window
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> RangeSelectorConfig {
        self.config
    }

    /// Current `(left, right)` pixel edges in overview-local space.
    #[must_use]
    pub fn pixel_edges(&self) -> (f64, f64) {
        (self.left_px, self.right_px)
    }

    #[must_use]
    pub fn min_span_indices(&self) -> usize {
        min_span_indices(self.config.touch_tolerance_px, self.width, self.len)
    }

    #[must_use]
    pub fn min_gap_px(&self) -> f64 {
        min_handle_gap_px(self.config.touch_tolerance_px, self.width, self.len)
    }

    /// Resolves which selection region, if any, lies under `(x, y)`.
    ///
    /// Handles cover `edge ± tolerance`, the band covers the open interior
    /// between the edges; where they overlap the configured priority decides.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<HitRegion> {
        if !self.is_enabled() || !x.is_finite() || !y.is_finite() {
            return None;
        }

        let tolerance = self.config.touch_tolerance_px;
        let frame_top = self.config.frame_thickness_px / 2.0;
        let frame_bottom = self.height - self.config.frame_thickness_px / 2.0;
        if y <= frame_top - tolerance || y >= frame_bottom + tolerance {
            return None;
        }

        let in_band = x > self.left_px && x < self.right_px;
        let right_distance = (x - self.right_px).abs();
        let left_distance = (x - self.left_px).abs();

        let mut edges: SmallVec<[(HitRegion, f64); 2]> = SmallVec::new();
        if right_distance < tolerance {
            edges.push((HitRegion::RightHandle, right_distance));
        }
        if left_distance < tolerance {
            edges.push((HitRegion::LeftHandle, left_distance));
        }

        match self.config.hit_priority {
            HitPriority::EdgeFirst => edges
                .iter()
                .min_by_key(|(_, distance)| OrderedFloat(*distance))
                .map(|(region, _)| *region)
                .or(in_band.then_some(HitRegion::Band)),
            HitPriority::BandFirst => {
                if in_band {
                    Some(HitRegion::Band)
                } else {
                    edges.first().map(|(region, _)| *region)
                }
            }
        }
    }

    /// Starts a drag when `(x, y)` hits a handle or the band.
    ///
    /// Presses during an active drag are ignored. Returns `true` when a drag
    /// started.
    pub fn press(&mut self, x: f64, y: f64) -> bool {
        if !self.state.is_idle() {
            return false;
        }
        let next = match self.hit_test(x, y) {
            Some(HitRegion::LeftHandle) => DragState::DraggingLeftHandle { last_x: x },
            Some(HitRegion::RightHandle) => DragState::DraggingRightHandle { last_x: x },
            Some(HitRegion::Band) => DragState::DraggingBand { last_x: x },
            None => return false,
        };
        debug!(?next, x, y, "selector press");
        self.state = next;
        true
    }

    /// Applies a pointer move to the active drag.
    ///
    /// Returns `true` when an edge moved. Moves while idle, repeated
    /// positions and rejected edge positions are no-ops.
    pub fn move_to(&mut self, x: f64, _y: f64) -> bool {
        let Some(last_x) = self.state.last_x() else {
            return false;
        };
        if !x.is_finite() || x == last_x {
            return false;
        }

        let proposal = match self.state {
            DragState::Idle => None,
            DragState::DraggingRightHandle { .. } => self.propose_right(x),
            DragState::DraggingLeftHandle { .. } => self.propose_left(x),
            DragState::DraggingBand { .. } => self.propose_shift(x - last_x),
        };
        self.state = self.state.with_last_x(x);

        match proposal {
            Some((left, right)) => self.apply_edges(left, right),
            None => false,
        }
    }

    /// Ends any drag.
    pub fn release(&mut self) {
        if !self.state.is_idle() {
            debug!(state = ?self.state, "selector release");
        }
        self.state = DragState::Idle;
    }

    /// Rescales the pixel edges to a new overview size, keeping their
    /// fractional position. Returns `true` when the window changed.
    ///
    /// A narrower strip needs a wider minimum span, so a selection that
    /// ends up closer than [`Self::min_gap_px`] is widened to the right, or
    /// to the left when the right edge is already at the strip end.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        let width = f64::from(viewport.width);
        let ratio = if self.width > 0.0 { width / self.width } else { 1.0 };
        self.width = width;
        self.height = f64::from(viewport.height);
        self.state = DragState::Idle;

        let mut left = (self.left_px * ratio).clamp(0.0, width);
        let mut right = (self.right_px * ratio).clamp(0.0, width);
        let previous = self.window;
        if !self.is_enabled() {
            self.left_px = left;
            self.right_px = right;
            return false;
        }

        let gap = self.min_gap_px();
        if right - left < gap {
            right = left + gap;
            if right > width {
                right = width;
                left = (width - gap).max(0.0);
            }
        }

        let window = match self.window_for(left, right) {
            Some(window) => window,
            None => {
                left = 0.0;
                right = width;
                ViewWindow::full(self.len)
            }
        };
        self.left_px = left;
        self.right_px = right;
        self.window = window;
        debug!(
            left_px = left,
            right_px = right,
            from_index = window.from_index,
            to_index = window.to_index,
            "selector resized"
        );
        window != previous
    }

    /// Overview overlay geometry, offset into `drawport` space.
    #[must_use]
    pub fn overlay(&self, drawport: Drawport) -> SelectionOverlay {
        let thickness = self.config.frame_thickness_px;
        let handle = self.config.handle_width_px;
        let left = drawport.left + self.left_px;
        let right = drawport.left + self.right_px;
        let top = drawport.top;
        let bottom = drawport.bottom();

        let frame_top = top + thickness / 2.0;
        let frame_bottom = bottom - thickness / 2.0;
        let left_bar = left + handle / 2.0;
        let right_bar = right - handle / 2.0;

        SelectionOverlay {
            unselected_left: PixelRect {
                x: drawport.left,
                y: top,
                width: self.left_px,
                height: drawport.height,
            },
            unselected_right: PixelRect {
                x: right,
                y: top,
                width: (drawport.right() - right).max(0.0),
                height: drawport.height,
            },
            frame_lines: [
                LineSegment {
                    x1: left,
                    y1: frame_top,
                    x2: right,
                    y2: frame_top,
                },
                LineSegment {
                    x1: left,
                    y1: frame_bottom,
                    x2: right,
                    y2: frame_bottom,
                },
            ],
            handle_lines: [
                LineSegment {
                    x1: left_bar,
                    y1: top + thickness,
                    x2: left_bar,
                    y2: bottom - thickness,
                },
                LineSegment {
                    x1: right_bar,
                    y1: top + thickness,
                    x2: right_bar,
                    y2: bottom - thickness,
                },
            ],
            frame_thickness_px: thickness,
            handle_width_px: handle,
        }
    }

    fn propose_right(&self, x: f64) -> Option<(f64, f64)> {
        if x < self.left_px + self.min_gap_px() {
            return None;
        }
        Some((self.left_px, x.min(self.width)))
    }

    fn propose_left(&self, x: f64) -> Option<(f64, f64)> {
        if x > self.right_px - self.min_gap_px() {
            return None;
        }
        Some((x.max(0.0), self.right_px))
    }

    /// Both edges move by the same clamped delta, so the band keeps its width.
    fn propose_shift(&self, delta: f64) -> Option<(f64, f64)> {
        let delta = delta.clamp(-self.left_px, (self.width - self.right_px).max(0.0));
        if delta == 0.0 {
            return None;
        }
        Some((self.left_px + delta, self.right_px + delta))
    }

    fn apply_edges(&mut self, left: f64, right: f64) -> bool {
        if left == self.left_px && right == self.right_px {
            return false;
        }
        let Some(window) = self.window_for(left, right) else {
            return false;
        };

        self.left_px = left;
        self.right_px = right;
        self.window = window;
        trace!(
            left_px = left,
            right_px = right,
            from_index = window.from_index,
            to_index = window.to_index,
            "selector window"
        );
        true
    }

    fn window_for(&self, left: f64, right: f64) -> Option<ViewWindow> {
        if !self.is_enabled() {
            return None;
        }
        let from = pixel_to_index(left, self.width, self.len);
        let to = pixel_to_index(right, self.width, self.len);
        if to <= from || to - from < self.min_span_indices() {
            return None;
        }
        ViewWindow::new(from, to, self.len).ok()
    }
}
