//! Easing curves mapping normalized progress to eased progress.
//!
//! Every curve satisfies `f(0) = 0` and `f(1) = 1`. Elastic and bounce curves
//! leave `[0, 1]` in between; the rest stay inside it. Inputs outside `[0, 1]`
//! are extrapolated with the same formula rather than clamped.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

use std::f64::consts::PI;

#[must_use]
pub fn linear(t: f64) -> f64 {
    t
}

#[must_use]
pub fn ease_in_quad(t: f64) -> f64 {
    t * t
}

#[must_use]
pub fn ease_in_cubic(t: f64) -> f64 {
    t * t * t
}

#[must_use]
pub fn ease_in_quart(t: f64) -> f64 {
    t * t * t * t
}

#[must_use]
pub fn ease_in_quint(t: f64) -> f64 {
    t * t * t * t * t
}

#[must_use]
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = t - 1.0;
    u * u * u + 1.0
}

#[must_use]
pub fn ease_out_quart(t: f64) -> f64 {
    let u = t - 1.0;
    1.0 - u * u * u * u
}

#[must_use]
pub fn ease_out_quint(t: f64) -> f64 {
    let u = t - 1.0;
    1.0 + u * u * u * u * u
}

#[must_use]
pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 { 2.0 * t * t } else { -1.0 + (4.0 - 2.0 * t) * t }
}

#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

#[must_use]
pub fn ease_in_out_quart(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        let u = t - 1.0;
        1.0 - 8.0 * u * u * u * u
    }
}

#[must_use]
pub fn ease_in_out_quint(t: f64) -> f64 {
    if t < 0.5 {
        16.0 * t * t * t * t * t
    } else {
        let u = t - 1.0;
        1.0 + 16.0 * u * u * u * u * u
    }
}

/// Elastic wind-up. Dips below zero before snapping to 1.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn ease_in_elastic(t: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    -(2.0_f64.powf(10.0 * (t - 1.0))) * ((t - 1.1) * 5.0 * PI).sin()
}

/// Elastic settle. Overshoots 1 before coming to rest.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn ease_out_elastic(t: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    2.0_f64.powf(-10.0 * t) * ((t - 0.1) * 5.0 * PI).sin() + 1.0
}

#[must_use]
pub fn ease_out_bounce(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let u = t - 1.5 / D1;
        N1 * u * u + 0.75
    } else if t < 2.5 / D1 {
        let u = t - 2.25 / D1;
        N1 * u * u + 0.9375
    } else {
        let u = t - 2.625 / D1;
        N1 * u * u + 0.984_375
    }
}

/// Named easing curve, for places that pick a curve by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseInCubic,
    EaseInQuart,
    EaseInQuint,
    EaseOutQuad,
    EaseOutCubic,
    EaseOutQuart,
    EaseOutQuint,
    EaseInOutQuad,
    EaseInOutCubic,
    EaseInOutQuart,
    EaseInOutQuint,
    EaseInElastic,
    EaseOutElastic,
    EaseOutBounce,
}

impl Easing {
    pub const ALL: [Self; 16] = [
        Self::Linear,
        Self::EaseInQuad,
        Self::EaseInCubic,
        Self::EaseInQuart,
        Self::EaseInQuint,
        Self::EaseOutQuad,
        Self::EaseOutCubic,
        Self::EaseOutQuart,
        Self::EaseOutQuint,
        Self::EaseInOutQuad,
        Self::EaseInOutCubic,
        Self::EaseInOutQuart,
        Self::EaseInOutQuint,
        Self::EaseInElastic,
        Self::EaseOutElastic,
        Self::EaseOutBounce,
    ];

    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => linear(t),
            Self::EaseInQuad => ease_in_quad(t),
            Self::EaseInCubic => ease_in_cubic(t),
            Self::EaseInQuart => ease_in_quart(t),
            Self::EaseInQuint => ease_in_quint(t),
            Self::EaseOutQuad => ease_out_quad(t),
            Self::EaseOutCubic => ease_out_cubic(t),
            Self::EaseOutQuart => ease_out_quart(t),
            Self::EaseOutQuint => ease_out_quint(t),
            Self::EaseInOutQuad => ease_in_out_quad(t),
            Self::EaseInOutCubic => ease_in_out_cubic(t),
            Self::EaseInOutQuart => ease_in_out_quart(t),
            Self::EaseInOutQuint => ease_in_out_quint(t),
            Self::EaseInElastic => ease_in_elastic(t),
            Self::EaseOutElastic => ease_out_elastic(t),
            Self::EaseOutBounce => ease_out_bounce(t),
        }
    }

    /// Whether the curve may leave `[0, 1]` between its endpoints.
    #[must_use]
    pub fn overshoots(self) -> bool {
        matches!(self, Self::EaseInElastic | Self::EaseOutElastic)
    }

    /// Look up a curve by its camelCase name. Unknown names fall back to linear.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "easeInQuad" => Self::EaseInQuad,
            "easeInCubic" => Self::EaseInCubic,
            "easeInQuart" => Self::EaseInQuart,
            "easeInQuint" => Self::EaseInQuint,
            "easeOutQuad" => Self::EaseOutQuad,
            "easeOutCubic" => Self::EaseOutCubic,
            "easeOutQuart" => Self::EaseOutQuart,
            "easeOutQuint" => Self::EaseOutQuint,
            "easeInOutQuad" => Self::EaseInOutQuad,
            "easeInOutCubic" => Self::EaseInOutCubic,
            "easeInOutQuart" => Self::EaseInOutQuart,
            "easeInOutQuint" => Self::EaseInOutQuint,
            "easeInElastic" => Self::EaseInElastic,
            "easeOutElastic" => Self::EaseOutElastic,
            "easeOutBounce" => Self::EaseOutBounce,
            _ => Self::Linear,
        }
    }
}

/// A value animated from `start` to `end` over `duration_ms`.
///
/// Driven by the host's frame clock: pass elapsed milliseconds since the
/// tween started. Progress is clamped, so late frames land exactly on `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(start: f64, end: f64, duration_ms: f64, easing: Easing) -> Self {
        Self { start, end, duration_ms, easing }
    }

    /// Normalized progress in `[0, 1]` after `elapsed_ms`.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let eased = self.easing.apply(self.progress(elapsed_ms));
        self.start + (self.end - self.start) * eased
    }

    #[must_use]
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}
