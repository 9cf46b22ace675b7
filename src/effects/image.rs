//! Gallery image load entrance.
//!
//! Each image starts `Loading` with a spinner. Once it loads (or fails to,
//! which is treated the same so a broken image never leaves a spinner up)
//! it plays a scale-in entrance when `gallery_animation` is active, or
//! appears at rest otherwise.

use super::emphasis::Emphasis;
use super::ease::SMOOTH;
use super::motion::{Frame, Tween};
use super::{Capability, EffectGate};
use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
}

#[derive(Debug, Clone)]
pub struct AnimatedImage {
    entrance: Option<Tween>,
    emphasis: Emphasis,
    clickable: bool,
    load: LoadState,
}

impl AnimatedImage {
    pub fn mount(gate: &EffectGate, clickable: bool, rng: &mut impl Rng) -> Self {
        let entrance = gate.is_active(Capability::GalleryAnimation).then(|| Tween {
            from: Frame {
                opacity: 0.0,
                scale: 0.8,
                ..Frame::REST
            },
            to: Frame::REST,
            duration: Duration::from_millis(600),
            delay: Duration::ZERO,
            ease: SMOOTH,
        });
        Self {
            entrance,
            emphasis: Emphasis::image(gate, rng),
            clickable,
            load: LoadState::Loading,
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn entrance(&self) -> Option<&Tween> {
        self.entrance.as_ref()
    }

    pub fn emphasis(&self) -> &Emphasis {
        &self.emphasis
    }

    pub fn on_load(&mut self) {
        self.load = LoadState::Loaded;
    }

    pub fn on_error(&mut self) {
        self.load = LoadState::Loaded;
    }

    pub fn shows_spinner(&self) -> bool {
        self.load == LoadState::Loading
    }

    /// The "tap to enlarge" overlay needs both hover emphasis and a click
    /// target.
    pub fn shows_enlarge_hint(&self) -> bool {
        self.clickable && self.emphasis.is_active()
    }

    /// Frame at `since_loaded` after loading finished.
    pub fn frame(&self, since_loaded: Duration) -> Frame {
        match (self.load, &self.entrance) {
            (LoadState::Loading, Some(tween)) => tween.from,
            (LoadState::Loaded, Some(tween)) => tween.sample(since_loaded),
            (_, None) => Frame::REST,
        }
    }
}
