//! Easing curves.

/// A CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Map linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let s = self.solve_x(t);
        bezier(s, self.y1, self.y2)
    }

    /// Find the curve parameter whose x equals `x`.
    ///
    /// Newton's method from `x` itself, falling back to bisection when the
    /// slope flattens. x is monotonic for `x1, x2` in `[0, 1]`.
    fn solve_x(self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..8 {
            let err = bezier(s, self.x1, self.x2) - x;
            if err.abs() < 1e-7 {
                return s;
            }
            let slope = bezier_slope(s, self.x1, self.x2);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= err / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        for _ in 0..50 {
            let v = bezier(s, self.x1, self.x2);
            if (v - x).abs() < 1e-7 {
                break;
            }
            if v < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }

    pub fn to_css(self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Timing function of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    Bezier(CubicBezier),
}

/// Soft deceleration shared by reveals, the page transition and image entrance.
pub const SMOOTH: Ease = Ease::Bezier(CubicBezier::new(0.25, 0.46, 0.45, 0.94));

/// CSS `ease-out`.
pub const EASE_OUT: Ease = Ease::Bezier(CubicBezier::new(0.0, 0.0, 0.58, 1.0));

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t.clamp(0.0, 1.0),
            Self::Bezier(curve) => curve.apply(t),
        }
    }

    /// CSS timing function.
    pub fn to_css(self) -> String {
        match self {
            Self::Linear => "linear".to_string(),
            Self::Bezier(curve) => curve.to_css(),
        }
    }
}
