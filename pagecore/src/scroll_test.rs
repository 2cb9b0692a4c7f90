use super::*;

fn at(y: f64) -> ScrollMetrics {
    ScrollMetrics { offset_x: 0.0, offset_y: y, viewport_height: 800.0, document_height: 2000.0 }
}

fn active_tracker() -> ScrollTracker {
    let mut tracker = ScrollTracker::default();
    tracker.activate();
    tracker
}

// =============================================================
// Progress
// =============================================================

#[test]
fn progress_is_fraction_of_track_length() {
    let mut tracker = ScrollTracker::default();
    let state = tracker.sample(at(600.0));
    assert_eq!(state.progress_percent, 50.0);
}

#[test]
fn progress_is_zero_when_page_fits_viewport() {
    assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
    assert_eq!(progress_percent(40.0, 800.0, 600.0), 0.0);
}

#[test]
fn progress_is_clamped() {
    assert_eq!(progress_percent(5000.0, 800.0, 2000.0), 100.0);
    assert_eq!(progress_percent(-30.0, 800.0, 2000.0), 0.0);
}

// =============================================================
// Direction
// =============================================================

#[test]
fn first_sample_has_no_direction() {
    let mut tracker = ScrollTracker::default();
    assert_eq!(tracker.sample(at(0.0)).direction, Direction::None);
}

#[test]
fn direction_follows_offset_changes() {
    let mut tracker = ScrollTracker::default();
    tracker.sample(at(0.0));
    assert_eq!(tracker.sample(at(100.0)).direction, Direction::Down);
    assert_eq!(tracker.sample(at(50.0)).direction, Direction::Up);
    assert_eq!(tracker.sample(at(50.0)).direction, Direction::None);
}

#[test]
fn first_sample_away_from_top_still_has_no_direction() {
    let mut tracker = ScrollTracker::default();
    assert_eq!(tracker.sample(at(700.0)).direction, Direction::None);
}

// =============================================================
// Boundary flags
// =============================================================

#[test]
fn flags_near_top() {
    let mut tracker = ScrollTracker::default();
    let state = tracker.sample(at(20.0));
    assert!(state.at_top);
    assert!(!state.at_bottom);
    assert!(!state.has_scrolled_past_threshold);
}

#[test]
fn flags_near_bottom() {
    let mut tracker = ScrollTracker::default();
    let state = tracker.sample(at(1150.0));
    assert!(!state.at_top);
    assert!(state.at_bottom);
    assert!(state.has_scrolled_past_threshold);
}

#[test]
fn default_state_is_at_top() {
    let state = ScrollState::default();
    assert!(state.at_top);
    assert_eq!(state.direction, Direction::None);
}

// =============================================================
// Frame coalescing
// =============================================================

#[test]
fn first_event_schedules_frame_later_events_coalesce() {
    let mut tracker = active_tracker();
    assert_eq!(tracker.on_scroll(at(10.0)), FrameRequest::Schedule);
    assert_eq!(tracker.on_scroll(at(20.0)), FrameRequest::Coalesced);
    assert_eq!(tracker.on_scroll(at(30.0)), FrameRequest::Coalesced);
    assert!(tracker.is_frame_pending());
}

#[test]
fn frame_uses_last_metrics_and_runs_once() {
    let mut tracker = active_tracker();
    tracker.on_scroll(at(10.0));
    tracker.on_scroll(at(20.0));
    tracker.on_scroll(at(600.0));

    let state = tracker.on_frame().expect("pending sample");
    assert_eq!(state.offset_y, 600.0);
    assert_eq!(tracker.sample_count(), 1);
    assert!(!tracker.is_frame_pending());
    assert!(tracker.on_frame().is_none());
}

#[test]
fn next_event_after_frame_schedules_again() {
    let mut tracker = active_tracker();
    tracker.on_scroll(at(10.0));
    tracker.on_frame();
    assert_eq!(tracker.on_scroll(at(40.0)), FrameRequest::Schedule);
}

#[test]
fn dropped_intra_frame_events_do_not_affect_direction() {
    let mut tracker = active_tracker();
    tracker.on_scroll(at(100.0));
    tracker.on_frame();
    tracker.on_scroll(at(300.0));
    tracker.on_scroll(at(80.0));
    let state = tracker.on_frame().expect("pending sample");
    assert_eq!(state.direction, Direction::Up);
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn inactive_tracker_ignores_events() {
    let mut tracker = ScrollTracker::default();
    assert_eq!(tracker.on_scroll(at(10.0)), FrameRequest::Coalesced);
    assert!(tracker.on_frame().is_none());
}

#[test]
fn deactivate_drops_pending_sample() {
    let mut tracker = active_tracker();
    tracker.on_scroll(at(10.0));
    tracker.deactivate();
    assert!(!tracker.is_active());
    assert!(tracker.on_frame().is_none());
    assert_eq!(tracker.sample_count(), 0);
}

#[test]
fn reactivated_tracker_schedules_fresh_frame() {
    let mut tracker = active_tracker();
    tracker.on_scroll(at(10.0));
    tracker.deactivate();
    tracker.activate();
    assert_eq!(tracker.on_scroll(at(20.0)), FrameRequest::Schedule);
}

// =============================================================
// Targets
// =============================================================

#[test]
fn element_target_subtracts_header_offset() {
    assert_eq!(element_scroll_target(400.0, 1000.0, 80.0), 1320.0);
}

#[test]
fn scroll_to_top_target_is_zero() {
    assert_eq!(scroll_to_top_target(), 0.0);
}

#[test]
fn rect_fully_visible_is_in_viewport() {
    let rect = Rect { top: 10.0, left: 0.0, bottom: 300.0, right: 400.0 };
    assert!(is_rect_in_viewport(rect, 1024.0, 768.0, 0.0));
}

#[test]
fn rect_below_fold_is_not_in_viewport() {
    let rect = Rect { top: 700.0, left: 0.0, bottom: 900.0, right: 400.0 };
    assert!(!is_rect_in_viewport(rect, 1024.0, 768.0, 0.0));
    assert!(is_rect_in_viewport(rect, 1024.0, 768.0, 200.0));
}
