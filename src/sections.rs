//! Section ordering and background alternation.
//!
//! The page body is a fixed sequence of sections, some of them optional.
//! [`SectionLayout::from_config`] computes the active ones once, in order,
//! and derives each section's background from its position in that list.
//! That keeps white/beige alternating no matter which optional sections are
//! switched off or where the gallery sits.
//!
//! ```text
//! hero                      (outside the alternation)
//! invitation                white
//! date                      beige
//! venue                     white
//! gallery   if middle       beige
//! rsvp      if enabled      ...
//! account   if enabled
//! gallery   if bottom
//! footer                    (outside the alternation)
//! ```

use crate::config::{GalleryPosition, SiteConfig};
use crate::effects::reveal::{RevealAnimation, RevealOptions};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Invitation,
    Date,
    Venue,
    Gallery,
    Rsvp,
    Account,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Self::Invitation => "invitation",
            Self::Date => "date",
            Self::Venue => "venue",
            Self::Gallery => "gallery",
            Self::Rsvp => "rsvp",
            Self::Account => "account",
        }
    }

    /// Scroll reveal for this section.
    pub fn reveal(self) -> RevealOptions {
        let (animation, delay_ms) = match self {
            Self::Invitation | Self::Venue => (RevealAnimation::SlideUp, 100),
            Self::Date => (RevealAnimation::FadeIn, 200),
            Self::Gallery => (RevealAnimation::ScaleIn, 300),
            Self::Rsvp => (RevealAnimation::SlideLeft, 200),
            Self::Account => (RevealAnimation::SlideRight, 200),
        };
        RevealOptions::new(animation, Duration::from_millis(delay_ms))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    White,
    Beige,
}

impl Background {
    fn at(position: usize) -> Self {
        if position % 2 == 0 {
            Self::White
        } else {
            Self::Beige
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Beige => "beige",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSection {
    pub section: Section,
    pub background: Background,
    pub reveal: RevealOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    pub sections: Vec<PlacedSection>,
    pub footer: RevealOptions,
}

impl SectionLayout {
    pub fn from_config(config: &SiteConfig) -> Self {
        let mut order = vec![Section::Invitation, Section::Date, Section::Venue];
        if config.gallery.position == GalleryPosition::Middle {
            order.push(Section::Gallery);
        }
        if config.rsvp.enabled {
            order.push(Section::Rsvp);
        }
        if config.account.enabled {
            order.push(Section::Account);
        }
        if config.gallery.position == GalleryPosition::Bottom {
            order.push(Section::Gallery);
        }

        let sections = order
            .into_iter()
            .enumerate()
            .map(|(position, section)| PlacedSection {
                section,
                background: Background::at(position),
                reveal: section.reveal(),
            })
            .collect();

        Self {
            sections,
            footer: RevealOptions::new(RevealAnimation::FadeIn, Duration::from_millis(100)),
        }
    }

    pub fn order(&self) -> Vec<Section> {
        self.sections.iter().map(|s| s.section).collect()
    }

    pub fn background_of(&self, section: Section) -> Option<Background> {
        self.sections
            .iter()
            .find(|s| s.section == section)
            .map(|s| s.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Background::{Beige, White};
    use Section::*;

    fn layout(position: GalleryPosition, rsvp: bool, account: bool) -> SectionLayout {
        let mut config = SiteConfig::default();
        config.gallery.position = position;
        config.rsvp.enabled = rsvp;
        config.account.enabled = account;
        SectionLayout::from_config(&config)
    }

    fn backgrounds(layout: &SectionLayout) -> Vec<Background> {
        layout.sections.iter().map(|s| s.background).collect()
    }

    #[test]
    fn default_layout() {
        let layout = SectionLayout::from_config(&SiteConfig::default());
        assert_eq!(layout.order(), vec![Invitation, Date, Venue, Gallery, Rsvp]);
        assert_eq!(backgrounds(&layout), vec![White, Beige, White, Beige, White]);
    }

    #[test]
    fn gallery_at_bottom_moves_after_optional_sections() {
        let layout = layout(GalleryPosition::Bottom, true, true);
        assert_eq!(
            layout.order(),
            vec![Invitation, Date, Venue, Rsvp, Account, Gallery]
        );
        assert_eq!(layout.background_of(Rsvp), Some(Beige));
        assert_eq!(layout.background_of(Gallery), Some(Beige));
    }

    #[test]
    fn alternation_survives_disabled_sections() {
        let layout = layout(GalleryPosition::Middle, false, true);
        assert_eq!(layout.order(), vec![Invitation, Date, Venue, Gallery, Account]);
        assert_eq!(layout.background_of(Account), Some(White));
        let bg = backgrounds(&layout);
        assert!(bg.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn disabled_sections_absent() {
        let layout = layout(GalleryPosition::Middle, false, false);
        assert_eq!(layout.background_of(Rsvp), None);
        assert_eq!(layout.background_of(Account), None);
    }

    #[test]
    fn reveal_per_section() {
        assert_eq!(Gallery.reveal().animation, RevealAnimation::ScaleIn);
        assert_eq!(Gallery.reveal().delay, Duration::from_millis(300));
        assert_eq!(Date.reveal().animation, RevealAnimation::FadeIn);
        assert_eq!(Account.reveal().animation, RevealAnimation::SlideRight);
        let layout = SectionLayout::from_config(&SiteConfig::default());
        assert_eq!(layout.footer.animation, RevealAnimation::FadeIn);
    }
}
