//! Scroll position tracking with per-frame coalescing.
//!
//! The host forwards every scroll event to [`ScrollTracker::on_scroll`]. Only
//! the first event in a frame asks the host for an animation frame; later
//! events in the same frame overwrite the pending metrics. When the frame
//! fires, [`ScrollTracker::on_frame`] computes one [`ScrollState`] from the
//! most recent metrics and the intermediate ones are gone.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::SCROLL_THRESHOLD_PX;

/// Raw numbers read from the window at event time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset_x: f64,
    pub offset_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    None,
}

/// Derived view of where the reader is in the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub offset_y: f64,
    pub offset_x: f64,
    /// Always within `[0, 100]`.
    pub progress_percent: f64,
    pub direction: Direction,
    pub at_top: bool,
    pub at_bottom: bool,
    pub has_scrolled_past_threshold: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset_y: 0.0,
            offset_x: 0.0,
            progress_percent: 0.0,
            direction: Direction::None,
            at_top: true,
            at_bottom: false,
            has_scrolled_past_threshold: false,
        }
    }
}

/// What the host must do after forwarding a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// Schedule an animation frame and call [`ScrollTracker::on_frame`] in it.
    Schedule,
    /// A frame is already pending (or the tracker is inactive).
    Coalesced,
}

/// Scroll progress for a page, `0` when the page does not scroll.
#[must_use]
pub fn progress_percent(offset_y: f64, viewport_height: f64, document_height: f64) -> f64 {
    let track = document_height - viewport_height;
    if track <= 0.0 {
        return 0.0;
    }
    (offset_y / track * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    threshold: f64,
    state: ScrollState,
    previous_y: Option<f64>,
    pending: Option<ScrollMetrics>,
    frame_pending: bool,
    active: bool,
    samples: u64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(SCROLL_THRESHOLD_PX)
    }
}

impl ScrollTracker {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: ScrollState::default(),
            previous_y: None,
            pending: None,
            frame_pending: false,
            active: false,
            samples: 0,
        }
    }

    // --- Lifecycle ---

    /// Start accepting scroll events.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Stop accepting scroll events and drop any pending sample.
    ///
    /// A frame already requested from the host may still fire; it finds
    /// nothing pending and produces no state.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.pending = None;
        self.frame_pending = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    // --- Event intake ---

    /// Record the metrics of one scroll event.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> FrameRequest {
        if !self.active {
            return FrameRequest::Coalesced;
        }
        self.pending = Some(metrics);
        if self.frame_pending {
            return FrameRequest::Coalesced;
        }
        self.frame_pending = true;
        FrameRequest::Schedule
    }

    /// Run the frame's single computation against the latest metrics.
    pub fn on_frame(&mut self) -> Option<ScrollState> {
        self.frame_pending = false;
        let metrics = self.pending.take()?;
        Some(self.sample(metrics))
    }

    /// Compute and store a new state from `metrics` immediately.
    pub fn sample(&mut self, metrics: ScrollMetrics) -> ScrollState {
        let y = metrics.offset_y;
        let direction = match self.previous_y {
            Some(prev) if y > prev => Direction::Down,
            Some(prev) if y < prev => Direction::Up,
            _ => Direction::None,
        };
        self.previous_y = Some(y);
        self.samples += 1;

        self.state = ScrollState {
            offset_y: y,
            offset_x: metrics.offset_x,
            progress_percent: progress_percent(y, metrics.viewport_height, metrics.document_height),
            direction,
            at_top: y < self.threshold,
            at_bottom: y + metrics.viewport_height >= metrics.document_height - self.threshold,
            has_scrolled_past_threshold: y > self.threshold,
        };
        self.state
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    #[must_use]
    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Number of computations run so far.
    #[must_use]
    pub fn sample_count(&self) -> u64 {
        self.samples
    }
}

// --- Scroll targets ---

/// Document offset for "back to top".
#[must_use]
pub fn scroll_to_top_target() -> f64 {
    0.0
}

/// Document offset that puts an element `offset_px` below the viewport top.
///
/// `element_top` is the element's viewport-relative top
/// (`getBoundingClientRect().top`); `page_offset` is the current scroll.
#[must_use]
pub fn element_scroll_target(element_top: f64, page_offset: f64, offset_px: f64) -> f64 {
    element_top + page_offset - offset_px
}

/// Viewport-relative bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Whether `rect` sits fully inside a `width` × `height` viewport, allowing
/// `offset` pixels of vertical slack.
#[must_use]
pub fn is_rect_in_viewport(rect: Rect, width: f64, height: f64, offset: f64) -> bool {
    rect.top >= -offset && rect.left >= 0.0 && rect.bottom <= height + offset && rect.right <= width
}
