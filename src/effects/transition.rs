//! Page enter/exit transition.
//!
//! The page body fades up on enter and fades up-and-out on exit. Children
//! are staggered by a fixed step. Gated off, the body renders directly with
//! no wrapper and no frames.

use super::ease::SMOOTH;
use super::motion::{Frame, Tween};
use super::{Capability, EffectGate};
use std::time::Duration;

const DURATION: Duration = Duration::from_millis(800);
const STAGGER: Duration = Duration::from_millis(100);
const OFFSET_Y: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub enum PageTransition {
    /// No wrapper; children are painted at rest.
    Static,
    Animated {
        enter: Tween,
        exit: Tween,
        stagger: Duration,
    },
}

impl PageTransition {
    pub fn mount(gate: &EffectGate) -> Self {
        if !gate.is_active(Capability::PageTransition) {
            return Self::Static;
        }
        let hidden = |y: f64| Frame {
            opacity: 0.0,
            y,
            ..Frame::REST
        };
        Self::Animated {
            enter: Tween {
                from: hidden(OFFSET_Y),
                to: Frame::REST,
                duration: DURATION,
                delay: Duration::ZERO,
                ease: SMOOTH,
            },
            exit: Tween {
                from: Frame::REST,
                to: hidden(-OFFSET_Y),
                duration: DURATION,
                delay: Duration::ZERO,
                ease: SMOOTH,
            },
            stagger: STAGGER,
        }
    }

    pub fn enter_frame(&self, elapsed: Duration) -> Frame {
        match self {
            Self::Static => Frame::REST,
            Self::Animated { enter, .. } => enter.sample(elapsed),
        }
    }

    pub fn exit_frame(&self, elapsed: Duration) -> Frame {
        match self {
            Self::Static => Frame::REST,
            Self::Animated { exit, .. } => exit.sample(elapsed),
        }
    }

    /// Extra delay for the `index`-th child.
    pub fn child_delay(&self, index: usize) -> Duration {
        match self {
            Self::Static => Duration::ZERO,
            Self::Animated { stagger, .. } => *stagger * index as u32,
        }
    }
}
