//! Motion effect orchestration.
//!
//! Every animated region asks one [`EffectGate`] whether its capability is on
//! before it sets up any timing or state machine. When the answer is no, the
//! region renders its final visual state immediately: no transition, no
//! observer, no timer. That is also the behavior under any doubt.
//!
//! | Module | Capability | Runs |
//! |--------|------------|------|
//! | [`reveal`] | `scroll_animation` | one-shot viewport reveal latch |
//! | [`transition`] | `page_transition` | enter/exit frames for the page body |
//! | [`emphasis`] | `button_animation`, `image_hover` | hover and press scale |
//! | [`image`] | `gallery_animation`, `image_hover` | load entrance for gallery images |
//! | [`particles`] | `falling_elements` | particle field generation and motion |
//! | [`particle_loop`] | `falling_elements` | 15 s regeneration task |
//!
//! Shared pieces: [`ease`] for the easing curves and [`motion`] for frames
//! and tweens.

pub mod ease;
pub mod emphasis;
pub mod image;
pub mod motion;
pub mod particle_loop;
pub mod particles;
pub mod reveal;
pub mod transition;

use crate::config::{EffectsConfig, FallingStyle, SiteConfig};

/// A named, independently toggleable animation feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    PageTransition,
    ScrollAnimation,
    ImageHover,
    GalleryAnimation,
    ButtonAnimation,
    FallingElements,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::PageTransition,
        Capability::ScrollAnimation,
        Capability::ImageHover,
        Capability::GalleryAnimation,
        Capability::ButtonAnimation,
        Capability::FallingElements,
    ];

    /// Config key for this capability.
    pub fn key(self) -> &'static str {
        match self {
            Self::PageTransition => "page_transition",
            Self::ScrollAnimation => "scroll_animation",
            Self::ImageHover => "image_hover",
            Self::GalleryAnimation => "gallery_animation",
            Self::ButtonAnimation => "button_animation",
            Self::FallingElements => "falling_elements",
        }
    }
}

/// Answers capability queries from an immutable [`EffectsConfig`].
///
/// `enabled = false` overrides every individual toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectGate {
    config: EffectsConfig,
}

impl EffectGate {
    pub fn new(config: EffectsConfig) -> Self {
        Self { config }
    }

    pub fn from_site(site: &SiteConfig) -> Self {
        Self::new(site.effects.clone())
    }

    pub fn config(&self) -> &EffectsConfig {
        &self.config
    }

    pub fn is_active(&self, capability: Capability) -> bool {
        if !self.config.enabled {
            return false;
        }
        match capability {
            Capability::PageTransition => self.config.page_transition,
            Capability::ScrollAnimation => self.config.scroll_animation,
            Capability::ImageHover => self.config.image_hover,
            Capability::GalleryAnimation => self.config.gallery_animation,
            Capability::ButtonAnimation => self.config.button_animation,
            Capability::FallingElements => self.config.falling_elements != FallingStyle::None,
        }
    }

    /// The particle style to run, or `None` when the particle layer is off.
    pub fn particle_style(&self) -> Option<FallingStyle> {
        self.is_active(Capability::FallingElements)
            .then_some(self.config.falling_elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{all_off, all_on, gate_with};

    #[test]
    fn defaults_activate_everything() {
        let gate = all_on();
        for capability in Capability::ALL {
            assert!(gate.is_active(capability), "{capability:?}");
        }
    }

    #[test]
    fn master_switch_dominates_every_toggle() {
        // Individual toggles all on, master off
        let gate = gate_with(|c| c.enabled = false);
        for capability in Capability::ALL {
            assert!(!gate.is_active(capability), "{capability:?}");
        }
        assert_eq!(gate.particle_style(), None);
    }

    #[test]
    fn master_switch_dominates_for_every_style() {
        for style in [
            FallingStyle::Hearts,
            FallingStyle::Petals,
            FallingStyle::Snow,
            FallingStyle::Sparkles,
            FallingStyle::Minimal,
            FallingStyle::Geometric,
        ] {
            let gate = gate_with(|c| {
                c.enabled = false;
                c.falling_elements = style;
            });
            assert!(!gate.is_active(Capability::FallingElements));
        }
    }

    #[test]
    fn individual_toggle_respected_when_enabled() {
        let gate = gate_with(|c| c.image_hover = false);
        assert!(!gate.is_active(Capability::ImageHover));
        assert!(gate.is_active(Capability::ButtonAnimation));
        assert!(gate.is_active(Capability::ScrollAnimation));
    }

    #[test]
    fn falling_none_is_inactive() {
        let gate = gate_with(|c| c.falling_elements = FallingStyle::None);
        assert!(!gate.is_active(Capability::FallingElements));
        assert_eq!(gate.particle_style(), None);
    }

    #[test]
    fn particle_style_passes_through() {
        let gate = gate_with(|c| c.falling_elements = FallingStyle::Snow);
        assert_eq!(gate.particle_style(), Some(FallingStyle::Snow));
    }

    #[test]
    fn all_off_config() {
        let gate = all_off();
        assert!(Capability::ALL.iter().all(|&c| !gate.is_active(c)));
    }

    #[test]
    fn keys_match_config_fields() {
        let value = toml::Value::try_from(EffectsConfig::default()).unwrap();
        for capability in Capability::ALL {
            assert!(value.get(capability.key()).is_some(), "{capability:?}");
        }
    }
}
