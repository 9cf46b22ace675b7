//! Ambient particle fields.
//!
//! A [`ParticleGenerator`] produces whole [`ParticleField`]s. Every
//! regeneration replaces the previous field outright; elements are never
//! added, removed or edited one by one. Glyphs are not part of the field:
//! they are drawn from the style's palette each time a field is rendered.

use super::motion::Frame;
use super::reveal::Viewport;
use crate::config::FallingStyle;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::ops::Range;
use std::time::Duration;

/// Pixels above the viewport where each fall starts.
pub const START_OFFSET: f64 = 50.0;

const DELAY_SECS: Range<f64> = 0.0..10.0;
const DURATION_SECS: Range<f64> = 8.0..14.0;
const SIZE_SPREAD: f64 = 0.3;

/// Opacity envelope over one fall: fade in over the first tenth, hold, fade
/// out over the last tenth.
const OPACITY_KEYFRAMES: [(f64, f64); 4] = [(0.0, 0.0), (0.1, 1.0), (0.9, 1.0), (1.0, 0.0)];

impl FallingStyle {
    pub fn element_count(self) -> usize {
        match self {
            Self::None => 0,
            Self::Minimal | Self::Geometric => 8,
            Self::Hearts | Self::Petals | Self::Snow | Self::Sparkles => 15,
        }
    }

    /// Lower bound of the size multiplier (rem). Sizes fall in
    /// `base..base + 0.3`.
    pub fn base_size(self) -> f64 {
        match self {
            Self::Minimal => 0.6,
            Self::Geometric => 0.4,
            _ => 0.8,
        }
    }

    pub fn palette(self) -> &'static [&'static str] {
        match self {
            Self::None => &[],
            Self::Hearts => &["💕", "💖", "💗", "💝", "💞"],
            Self::Petals => &["🌸", "🌺", "🏵️"],
            Self::Snow => &["❄️"],
            Self::Sparkles => &["✨", "⭐", "💫", "🌟", "✦", "✧"],
            Self::Minimal => &["·", "∘", "◦", "°", "•"],
            Self::Geometric => &["◇", "◈", "◊", "△", "▽", "○"],
        }
    }
}

/// One falling element. Times are in seconds, `x` in percent of viewport
/// width, `rotation` in degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleElement {
    pub id: usize,
    pub x: f64,
    pub delay: f64,
    pub duration: f64,
    pub size: f64,
    pub rotation: f64,
}

impl ParticleElement {
    /// Frame at `elapsed` since the field was mounted.
    ///
    /// Invisible at the start position during the delay, then falls from
    /// [`START_OFFSET`] above the viewport to its bottom edge while turning
    /// one extra revolution, and starts over.
    pub fn sample(&self, elapsed: Duration, viewport: Viewport) -> Frame {
        let x = self.x / 100.0 * viewport.width;
        let start = Frame {
            opacity: 0.0,
            x,
            y: -START_OFFSET,
            scale: 1.0,
            rotate: self.rotation,
        };
        let active = elapsed.as_secs_f64() - self.delay;
        if active < 0.0 || self.duration <= 0.0 {
            return start;
        }
        let t = (active % self.duration) / self.duration;
        Frame {
            opacity: opacity_at(t),
            y: -START_OFFSET + (viewport.height + START_OFFSET) * t,
            rotate: self.rotation + 360.0 * t,
            ..start
        }
    }

    /// Inline custom properties consumed by the `fall` keyframes.
    pub fn css_vars(&self) -> String {
        format!(
            "left:{:.2}vw;font-size:{:.2}rem;--rot:{:.1}deg;animation-delay:{:.2}s;animation-duration:{:.2}s",
            self.x, self.size, self.rotation, self.delay, self.duration
        )
    }
}

fn opacity_at(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    for pair in OPACITY_KEYFRAMES.windows(2) {
        let (t0, v0) = pair[0];
        let (t1, v1) = pair[1];
        if t <= t1 {
            return v0 + (v1 - v0) * (t - t0) / (t1 - t0);
        }
    }
    0.0
}

/// The complete element set of one regeneration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleField {
    pub style: FallingStyle,
    /// 1 for the first field of a generator, incremented per regeneration.
    pub generation: u64,
    pub elements: Vec<ParticleElement>,
}

impl ParticleField {
    /// Attach a glyph to every element.
    pub fn render(&self, rng: &mut impl Rng) -> RenderedField {
        let palette = self.style.palette();
        let particles = self
            .elements
            .iter()
            .map(|element| RenderedParticle {
                glyph: palette.choose(rng).copied().unwrap_or("·"),
                element: element.clone(),
            })
            .collect();
        RenderedField {
            style: self.style,
            generation: self.generation,
            particles,
        }
    }
}

/// Body of `GET /api/particles`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedField {
    pub style: FallingStyle,
    pub generation: u64,
    pub particles: Vec<RenderedParticle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedParticle {
    #[serde(flatten)]
    pub element: ParticleElement,
    pub glyph: &'static str,
}

pub struct ParticleGenerator {
    style: FallingStyle,
    rng: StdRng,
    generation: u64,
}

impl ParticleGenerator {
    pub fn new(style: FallingStyle) -> Self {
        Self::with_rng(style, StdRng::from_entropy())
    }

    pub fn with_rng(style: FallingStyle, rng: StdRng) -> Self {
        Self {
            style,
            rng,
            generation: 0,
        }
    }

    pub fn style(&self) -> FallingStyle {
        self.style
    }

    /// Draw a fresh field of `element_count` elements.
    pub fn regenerate(&mut self) -> ParticleField {
        self.generation += 1;
        let base = self.style.base_size();
        let elements = (0..self.style.element_count())
            .map(|id| ParticleElement {
                id,
                x: self.rng.gen_range(0.0..100.0),
                delay: self.rng.gen_range(DELAY_SECS),
                duration: self.rng.gen_range(DURATION_SECS),
                size: base + self.rng.gen_range(0.0..SIZE_SPREAD),
                rotation: self.rng.gen_range(0.0..360.0),
            })
            .collect();
        ParticleField {
            style: self.style,
            generation: self.generation,
            elements,
        }
    }
}
