use super::*;

const SAMPLES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Endpoints and range
// =============================================================

#[test]
fn every_curve_starts_at_zero_and_ends_at_one() {
    for easing in Easing::ALL {
        assert!(approx(easing.apply(0.0), 0.0), "{easing:?} at 0");
        assert!(approx(easing.apply(1.0), 1.0), "{easing:?} at 1");
    }
}

#[test]
fn non_elastic_curves_stay_in_unit_range() {
    for easing in Easing::ALL.into_iter().filter(|e| !e.overshoots()) {
        for t in SAMPLES {
            let v = easing.apply(t);
            assert!((0.0..=1.0 + 1e-9).contains(&v), "{easing:?}({t}) = {v}");
        }
    }
}

#[test]
fn out_elastic_overshoots_one() {
    let peak = (1..100)
        .map(|i| ease_out_elastic(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn in_elastic_dips_below_zero() {
    let trough = (1..100)
        .map(|i| ease_in_elastic(f64::from(i) / 100.0))
        .fold(f64::MAX, f64::min);
    assert!(trough < 0.0);
}

// =============================================================
// Shapes
// =============================================================

#[test]
fn in_curves_lag_linear_at_midpoint() {
    assert!(ease_in_quad(0.5) < 0.5);
    assert!(ease_in_cubic(0.5) < ease_in_quad(0.5));
    assert!(ease_in_quart(0.5) < ease_in_cubic(0.5));
    assert!(ease_in_quint(0.5) < ease_in_quart(0.5));
}

#[test]
fn out_curves_lead_linear_at_midpoint() {
    assert!(ease_out_quad(0.5) > 0.5);
    assert!(ease_out_cubic(0.5) > ease_out_quad(0.5));
    assert!(ease_out_quart(0.5) > ease_out_cubic(0.5));
    assert!(ease_out_quint(0.5) > ease_out_quart(0.5));
}

#[test]
fn in_out_curves_hit_half_at_midpoint() {
    assert!(approx(ease_in_out_quad(0.5), 0.5));
    assert!(approx(ease_in_out_cubic(0.5), 0.5));
    assert!(approx(ease_in_out_quart(0.5), 0.5));
    assert!(approx(ease_in_out_quint(0.5), 0.5));
}

#[test]
fn bounce_segments_join_up() {
    assert!(approx(ease_out_bounce(1.0 / 2.75), 1.0));
    assert!(approx(ease_out_bounce(0.5), 0.765_625));
}

#[test]
fn inputs_outside_unit_range_extrapolate() {
    assert!(approx(linear(1.5), 1.5));
    assert!(approx(ease_in_quad(-1.0), 1.0));
    assert!(approx(ease_out_quad(2.0), 0.0));
}

// =============================================================
// Easing::from_name
// =============================================================

#[test]
fn from_name_resolves_known_curves() {
    assert_eq!(Easing::from_name("easeInOutCubic"), Easing::EaseInOutCubic);
    assert_eq!(Easing::from_name("easeOutBounce"), Easing::EaseOutBounce);
}

#[test]
fn from_name_unknown_falls_back_to_linear() {
    assert_eq!(Easing::from_name("wobble"), Easing::Linear);
    assert_eq!(Easing::from_name(""), Easing::Linear);
}

// =============================================================
// Tween
// =============================================================

#[test]
fn tween_interpolates_between_endpoints() {
    let tween = Tween::new(100.0, 300.0, 1000.0, Easing::Linear);
    assert!(approx(tween.value_at(0.0), 100.0));
    assert!(approx(tween.value_at(500.0), 200.0));
    assert!(approx(tween.value_at(1000.0), 300.0));
}

#[test]
fn tween_clamps_late_frames_to_end() {
    let tween = Tween::new(0.0, 50.0, 200.0, Easing::EaseInOutCubic);
    assert!(approx(tween.value_at(5000.0), 50.0));
    assert!(tween.is_finished(200.0));
    assert!(!tween.is_finished(199.0));
}

#[test]
fn tween_runs_backwards_when_end_below_start() {
    let tween = Tween::new(600.0, 0.0, 100.0, Easing::Linear);
    assert!(approx(tween.value_at(25.0), 450.0));
}

#[test]
fn tween_with_zero_duration_jumps_to_end() {
    let tween = Tween::new(10.0, 20.0, 0.0, Easing::EaseOutQuad);
    assert!(approx(tween.value_at(0.0), 20.0));
}
