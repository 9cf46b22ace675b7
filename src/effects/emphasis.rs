//! Hover and press emphasis.
//!
//! An active emphasis scales up on hover and down on press. An inert one
//! produces no transform at all: [`Emphasis::target`] returns `None` for
//! every interaction, so nothing is written to the element's style.

use super::ease::{EASE_OUT, Ease};
use super::{Capability, EffectGate};
use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Rest,
    Hover,
    Press,
}

/// Where an interaction drives the element, and how fast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmphasisTarget {
    pub scale: f64,
    /// Degrees.
    pub rotate: f64,
    pub duration: Duration,
    pub ease: Ease,
}

impl EmphasisTarget {
    fn scale(scale: f64, duration: Duration) -> Self {
        Self {
            scale,
            rotate: 0.0,
            duration,
            ease: Ease::Linear,
        }
    }

    pub fn css_transform(&self) -> String {
        if self.rotate == 0.0 {
            format!("scale({})", self.scale)
        } else {
            format!("scale({}) rotate({}deg)", self.scale, self.rotate)
        }
    }

    pub fn css_transition(&self) -> String {
        format!(
            "transform {}s {}",
            self.duration.as_secs_f64(),
            self.ease.to_css()
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Emphasis {
    Inert,
    Active {
        hover: EmphasisTarget,
        press: EmphasisTarget,
    },
}

impl Emphasis {
    /// Emphasis for buttons: 1.05 on hover, 0.95 on press.
    pub fn button(gate: &EffectGate) -> Self {
        if !gate.is_active(Capability::ButtonAnimation) {
            return Self::Inert;
        }
        Self::Active {
            hover: EmphasisTarget::scale(1.05, Duration::from_millis(200)),
            press: EmphasisTarget::scale(0.95, Duration::from_millis(100)),
        }
    }

    /// Emphasis for gallery images: 1.05 with a one-degree tilt to a random
    /// side on hover, 0.98 on press.
    pub fn image(gate: &EffectGate, rng: &mut impl Rng) -> Self {
        if !gate.is_active(Capability::ImageHover) {
            return Self::Inert;
        }
        let tilt = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        Self::Active {
            hover: EmphasisTarget {
                scale: 1.05,
                rotate: tilt,
                duration: Duration::from_millis(300),
                ease: EASE_OUT,
            },
            press: EmphasisTarget::scale(0.98, Duration::from_millis(100)),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Transform target for an interaction. `None` means leave the element
    /// untouched, which is the case for `Rest` and for every interaction on
    /// an inert emphasis.
    pub fn target(&self, interaction: Interaction) -> Option<EmphasisTarget> {
        match (self, interaction) {
            (Self::Inert, _) | (_, Interaction::Rest) => None,
            (Self::Active { hover, .. }, Interaction::Hover) => Some(*hover),
            (Self::Active { press, .. }, Interaction::Press) => Some(*press),
        }
    }

    /// Custom properties read by the `.emphasis` stylesheet rules, or
    /// `None` when inert so the element carries no emphasis at all.
    pub fn css_vars(&self) -> Option<String> {
        let hover = self.target(Interaction::Hover)?;
        let press = self.target(Interaction::Press)?;
        Some(format!(
            "--hover-transform:{};--hover-transition:{};\
             --press-transform:{};--press-transition:{}",
            hover.css_transform(),
            hover.css_transition(),
            press.css_transform(),
            press.css_transition(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{all_off, all_on, gate_with};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn button_scales() {
        let emphasis = Emphasis::button(&all_on());
        assert_eq!(emphasis.target(Interaction::Hover).unwrap().scale, 1.05);
        assert_eq!(emphasis.target(Interaction::Press).unwrap().scale, 0.95);
        assert_eq!(emphasis.target(Interaction::Rest), None);
    }

    #[test]
    fn inert_button_has_no_transform() {
        for gate in [all_off(), gate_with(|c| c.button_animation = false)] {
            let emphasis = Emphasis::button(&gate);
            assert_eq!(emphasis, Emphasis::Inert);
            assert_eq!(emphasis.target(Interaction::Hover), None);
            assert_eq!(emphasis.target(Interaction::Press), None);
            assert_eq!(emphasis.css_vars(), None);
        }
    }

    #[test]
    fn image_tilt_is_one_degree_either_way() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let emphasis = Emphasis::image(&all_on(), &mut rng);
            let hover = emphasis.target(Interaction::Hover).unwrap();
            assert_eq!(hover.rotate.abs(), 1.0);
            assert_eq!(hover.scale, 1.05);
            assert_eq!(emphasis.target(Interaction::Press).unwrap().scale, 0.98);
        }
    }

    #[test]
    fn image_hover_gated_independently_of_buttons() {
        let gate = gate_with(|c| c.image_hover = false);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(!Emphasis::image(&gate, &mut rng).is_active());
        assert!(Emphasis::button(&gate).is_active());
    }

    #[test]
    fn css_vars_for_button() {
        let css = Emphasis::button(&all_on()).css_vars().unwrap();
        assert!(css.contains("--hover-transform:scale(1.05);"));
        assert!(css.contains("--press-transform:scale(0.95);--press-transition:transform 0.1s linear"));
    }

    #[test]
    fn image_vars_carry_tilt() {
        let mut rng = StdRng::seed_from_u64(2);
        let css = Emphasis::image(&all_on(), &mut rng).css_vars().unwrap();
        assert!(css.contains("rotate(1deg)") || css.contains("rotate(-1deg)"));
    }
}
