//! Visual frames and tweens between them.

use super::ease::Ease;
use std::time::Duration;

/// Animatable visual properties of a region.
///
/// Offsets are in CSS pixels, rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Frame {
    /// Fully visible, untransformed.
    pub const REST: Frame = Frame {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    /// Linear blend; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, to: Frame, t: f64) -> Frame {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Frame {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            rotate: mix(self.rotate, to.rotate),
        }
    }

    pub fn is_rest(&self) -> bool {
        *self == Self::REST
    }

    /// Inline CSS declarations. Empty for [`Frame::REST`] so static regions
    /// carry no style at all.
    pub fn to_css(&self) -> String {
        if self.is_rest() {
            return String::new();
        }
        format!(
            "opacity:{};transform:translate({}px,{}px) scale({}) rotate({}deg)",
            self.opacity, self.x, self.y, self.scale, self.rotate
        )
    }
}

/// A timed interpolation between two frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Frame,
    pub to: Frame,
    pub duration: Duration,
    pub delay: Duration,
    pub ease: Ease,
}

impl Tween {
    /// Frame at `elapsed` since the tween was triggered.
    pub fn sample(&self, elapsed: Duration) -> Frame {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return self.from;
        };
        if self.duration.is_zero() {
            return self.to;
        }
        let t = active.as_secs_f64() / self.duration.as_secs_f64();
        self.from.lerp(self.to, self.ease.apply(t))
    }

    /// CSS `transition` value for the properties a [`Frame`] touches.
    pub fn css_transition(&self) -> String {
        let timing = format!(
            "{}s {} {}s",
            self.duration.as_secs_f64(),
            self.ease.to_css(),
            self.delay.as_secs_f64()
        );
        format!("opacity {timing},transform {timing}")
    }
}
