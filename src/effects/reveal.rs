//! One-shot scroll reveal.
//!
//! A reveal region starts `Hidden` and latches `Visible` the first time its
//! bounding box intersects the (margin-adjusted) viewport. After that the
//! observer is detached and every further event is ignored, so scrolling the
//! region back out never hides it again.
//!
//! With `scroll_animation` gated off the region mounts already `Visible` and
//! never observes anything.

use super::ease::SMOOTH;
use super::motion::{Frame, Tween};
use super::{Capability, EffectGate};
use std::time::Duration;

/// Named start frames. Every variant ends at [`Frame::REST`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealAnimation {
    #[default]
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    FadeIn,
    ScaleIn,
}

impl RevealAnimation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SlideUp => "slideUp",
            Self::SlideDown => "slideDown",
            Self::SlideLeft => "slideLeft",
            Self::SlideRight => "slideRight",
            Self::FadeIn => "fadeIn",
            Self::ScaleIn => "scaleIn",
        }
    }

    pub fn start_frame(self) -> Frame {
        let hidden = Frame {
            opacity: 0.0,
            ..Frame::REST
        };
        match self {
            Self::SlideUp => Frame { y: 50.0, ..hidden },
            Self::SlideDown => Frame { y: -50.0, ..hidden },
            Self::SlideLeft => Frame { x: 50.0, ..hidden },
            Self::SlideRight => Frame { x: -50.0, ..hidden },
            Self::FadeIn => hidden,
            Self::ScaleIn => Frame {
                scale: 0.8,
                ..hidden
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub animation: RevealAnimation,
    pub delay: Duration,
    pub duration: Duration,
    /// Root margin in pixels applied to every viewport edge. Negative values
    /// shrink the viewport, so the region must be that far inside before it
    /// counts as in view.
    pub margin: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            animation: RevealAnimation::SlideUp,
            delay: Duration::ZERO,
            duration: Duration::from_millis(600),
            margin: -50.0,
        }
    }
}

impl RevealOptions {
    pub fn new(animation: RevealAnimation, delay: Duration) -> Self {
        Self {
            animation,
            delay,
            ..Self::default()
        }
    }
}

/// A box in viewport coordinates (pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Whether `rect` overlaps the viewport grown (or shrunk) by `margin`.
pub fn intersects(rect: Rect, viewport: Viewport, margin: f64) -> bool {
    rect.top < viewport.height + margin
        && rect.bottom > -margin
        && rect.left < viewport.width + margin
        && rect.right > -margin
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

/// Reveal state for one mounted region.
#[derive(Debug, Clone)]
pub struct RevealRegion {
    options: RevealOptions,
    animated: bool,
    state: RevealState,
    observing: bool,
}

impl RevealRegion {
    pub fn mount(gate: &EffectGate, options: RevealOptions) -> Self {
        let animated = gate.is_active(Capability::ScrollAnimation);
        Self {
            options,
            animated,
            state: if animated {
                RevealState::Hidden
            } else {
                RevealState::Visible
            },
            observing: animated,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Whether an intersection observer is attached.
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Feed one intersection observation. Returns `true` only for the call
    /// that flips the region to `Visible`.
    pub fn observe(&mut self, rect: Rect, viewport: Viewport) -> bool {
        if !self.observing || !intersects(rect, viewport, self.options.margin) {
            return false;
        }
        self.state = RevealState::Visible;
        self.observing = false;
        tracing::trace!(animation = self.options.animation.as_str(), "region revealed");
        true
    }

    /// The reveal tween, or `None` for a static region.
    pub fn tween(&self) -> Option<Tween> {
        self.animated.then(|| Tween {
            from: self.options.animation.start_frame(),
            to: Frame::REST,
            duration: self.options.duration,
            delay: self.options.delay,
            ease: SMOOTH,
        })
    }

    /// Frame to paint before any observation arrives.
    pub fn initial_frame(&self) -> Frame {
        match self.state {
            RevealState::Hidden => self.options.animation.start_frame(),
            RevealState::Visible => Frame::REST,
        }
    }

    /// Frame at `since_reveal` after the region became visible. Hidden
    /// regions hold their start frame; static regions are always at rest.
    pub fn frame(&self, since_reveal: Duration) -> Frame {
        match (self.state, self.tween()) {
            (RevealState::Hidden, _) => self.initial_frame(),
            (RevealState::Visible, Some(tween)) => tween.sample(since_reveal),
            (RevealState::Visible, None) => Frame::REST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{all_off, all_on, gate_with};

    const VIEWPORT: Viewport = Viewport {
        width: 400.0,
        height: 800.0,
    };

    fn at(top: f64) -> Rect {
        Rect {
            top,
            left: 0.0,
            bottom: top + 300.0,
            right: 400.0,
        }
    }

    fn region() -> RevealRegion {
        RevealRegion::mount(&all_on(), RevealOptions::default())
    }

    #[test]
    fn mounts_hidden_and_observing_when_active() {
        let region = region();
        assert_eq!(region.state(), RevealState::Hidden);
        assert!(region.is_observing());
        assert_eq!(region.initial_frame().opacity, 0.0);
    }

    #[test]
    fn mounts_visible_without_observer_when_gated_off() {
        for gate in [all_off(), gate_with(|c| c.scroll_animation = false)] {
            let region = RevealRegion::mount(&gate, RevealOptions::default());
            assert_eq!(region.state(), RevealState::Visible);
            assert!(!region.is_observing());
            assert!(region.tween().is_none());
            assert_eq!(region.initial_frame(), Frame::REST);
        }
    }

    #[test]
    fn gated_off_region_ignores_intersections() {
        let mut region = RevealRegion::mount(&all_off(), RevealOptions::default());
        assert!(!region.observe(at(100.0), VIEWPORT));
        assert_eq!(region.frame(Duration::ZERO), Frame::REST);
    }

    #[test]
    fn below_fold_stays_hidden() {
        let mut region = region();
        assert!(!region.observe(at(1200.0), VIEWPORT));
        assert_eq!(region.state(), RevealState::Hidden);
    }

    #[test]
    fn margin_delays_trigger() {
        let mut region = region();
        // Top edge 20px inside the viewport: within the -50px margin
        assert!(!region.observe(at(780.0), VIEWPORT));
        assert!(region.observe(at(740.0), VIEWPORT));
    }

    #[test]
    fn positive_margin_triggers_early() {
        let options = RevealOptions {
            margin: 100.0,
            ..RevealOptions::default()
        };
        let mut region = RevealRegion::mount(&all_on(), options);
        assert!(region.observe(at(850.0), VIEWPORT));
    }

    #[test]
    fn reveal_latches_after_leaving_viewport() {
        let mut region = region();
        assert!(region.observe(at(100.0), VIEWPORT));
        assert!(!region.is_observing());

        // Scrolled away above, then below
        assert!(!region.observe(at(-2000.0), VIEWPORT));
        assert!(!region.observe(at(5000.0), VIEWPORT));
        assert_eq!(region.state(), RevealState::Visible);
    }

    #[test]
    fn fires_exactly_once() {
        let mut region = region();
        let fired: Vec<bool> = (0..3).map(|_| region.observe(at(100.0), VIEWPORT)).collect();
        assert_eq!(fired, vec![true, false, false]);
    }

    #[test]
    fn frames_follow_tween_after_reveal() {
        let mut region = RevealRegion::mount(
            &all_on(),
            RevealOptions::new(RevealAnimation::ScaleIn, Duration::from_millis(300)),
        );
        assert_eq!(region.frame(Duration::from_secs(5)).scale, 0.8);

        region.observe(at(0.0), VIEWPORT);
        assert_eq!(region.frame(Duration::ZERO).scale, 0.8);
        assert_eq!(region.frame(Duration::from_millis(900)), Frame::REST);
    }

    #[test]
    fn variants_start_frames() {
        assert_eq!(RevealAnimation::SlideUp.start_frame().y, 50.0);
        assert_eq!(RevealAnimation::SlideDown.start_frame().y, -50.0);
        assert_eq!(RevealAnimation::SlideLeft.start_frame().x, 50.0);
        assert_eq!(RevealAnimation::SlideRight.start_frame().x, -50.0);
        assert_eq!(RevealAnimation::ScaleIn.start_frame().scale, 0.8);
        let fade = RevealAnimation::FadeIn.start_frame();
        assert_eq!(fade, Frame { opacity: 0.0, ..Frame::REST });
    }
}
