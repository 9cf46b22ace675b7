//! Invitation page rendering.
//!
//! Renders the single page served at `/` from the site config, the current
//! gallery resolution and particle field. Every effect asks the
//! [`EffectGate`] before emitting anything: a region whose capability is off
//! is rendered at rest with no inline style, no `data-*` hooks and no
//! wrapper, so the client script finds nothing to animate.
//!
//! ## Client hooks
//!
//! | Attribute | Meaning |
//! |-----------|---------|
//! | `data-reveal` | reveal region, latched once by `IntersectionObserver` |
//! | `data-reveal-transition` | CSS transition applied when it latches |
//! | `data-reveal-margin` | observer root margin in px |
//! | `data-entrance` | image entrance transition, run on load or error |
//! | `data-particles` | particle layer, refreshed from `/api/particles` |
//! | `data-copy` | button copying its value to the clipboard |
//!
//! CSS and the client script are embedded at compile time from `static/`.

use crate::config::{GiftAccount, SiteConfig};
use crate::effects::EffectGate;
use crate::effects::emphasis::Emphasis;
use crate::effects::image::AnimatedImage;
use crate::effects::particle_loop::REGENERATION_INTERVAL;
use crate::effects::particles::ParticleField;
use crate::effects::reveal::{RevealOptions, RevealRegion};
use crate::effects::transition::PageTransition;
use crate::gallery::GalleryResolution;
use crate::sections::{PlacedSection, Section, SectionLayout};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use rand::Rng;

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/effects.js");

/// Everything one page render reads.
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    pub gate: &'a EffectGate,
    pub gallery: &'a GalleryResolution,
    /// Current particle field, `None` when the particle layer is off.
    pub particles: Option<&'a ParticleField>,
}

/// One gallery tile: the full-size target and the image shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub display: String,
    pub thumb: String,
}

/// Tiles for a resolution.
///
/// Live slots without a display image are skipped since there is nothing
/// to enlarge to. A missing thumbnail falls back to the display image.
/// Fallback resolutions use each fallback URL for both.
pub fn gallery_items(resolution: &GalleryResolution) -> Vec<GalleryItem> {
    match resolution {
        GalleryResolution::Live(slots) => slots
            .iter()
            .filter_map(|slot| {
                let display = slot.display.clone()?;
                let thumb = slot.thumb.clone().unwrap_or_else(|| display.clone());
                Some(GalleryItem { display, thumb })
            })
            .collect(),
        _ => resolution
            .display_urls()
            .into_iter()
            .map(|url| GalleryItem {
                thumb: url.clone(),
                display: url,
            })
            .collect(),
    }
}

pub fn render_page(ctx: &PageContext<'_>, rng: &mut impl Rng) -> Markup {
    let invitation = &ctx.config.invitation;
    let title = format!("{} & {}", invitation.groom, invitation.bride);
    let layout = SectionLayout::from_config(ctx.config);
    let transition = PageTransition::mount(ctx.gate);
    let css = format!("{CSS_STATIC}{}", transition_css(&transition));

    let mut children = vec![render_hero(ctx)];
    for placed in &layout.sections {
        children.push(reveal_wrapper(
            ctx.gate,
            placed.reveal,
            render_section(ctx, placed, rng),
        ));
    }
    children.push(reveal_wrapper(ctx.gate, layout.footer, render_footer(ctx)));

    let content = html! {
        @if let Some(field) = ctx.particles {
            (render_particles(field, rng))
        }
        (page_wrapper(&transition, children))
    };

    base_document(&title, &css, content)
}

// ============================================================================
// Document
// ============================================================================

fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Enter keyframes for the page transition, empty when static.
fn transition_css(transition: &PageTransition) -> String {
    match transition {
        PageTransition::Static => String::new(),
        PageTransition::Animated { enter, .. } => format!(
            "@keyframes page-enter{{from{{{}}}}}\
             .page-child{{animation:page-enter {}s {} both}}",
            enter.from.to_css(),
            enter.duration.as_secs_f64(),
            enter.ease.to_css(),
        ),
    }
}

/// Wraps the page children for the enter transition, or emits them bare.
fn page_wrapper(transition: &PageTransition, children: Vec<Markup>) -> Markup {
    match transition {
        PageTransition::Static => html! {
            main {
                @for child in children { (child) }
            }
        },
        PageTransition::Animated { exit, .. } => html! {
            main.page-transition data-exit-style=(exit.to.to_css())
                data-exit-transition=(exit.css_transition()) {
                @for (i, child) in children.into_iter().enumerate() {
                    div.page-child style={
                        "animation-delay:" (transition.child_delay(i).as_secs_f64()) "s"
                    } {
                        (child)
                    }
                }
            }
        },
    }
}

/// Reveal wrapper for one region. Gated off, the region renders directly.
fn reveal_wrapper(gate: &EffectGate, options: RevealOptions, content: Markup) -> Markup {
    let region = RevealRegion::mount(gate, options);
    match region.tween() {
        Some(tween) if region.is_observing() => html! {
            div.reveal
                data-reveal=(options.animation.as_str())
                data-reveal-transition=(tween.css_transition())
                data-reveal-margin=(options.margin)
                style=(region.initial_frame().to_css()) {
                (content)
            }
        },
        _ => content,
    }
}

// ============================================================================
// Sections
// ============================================================================

fn render_hero(ctx: &PageContext<'_>) -> Markup {
    let invitation = &ctx.config.invitation;
    html! {
        header.hero {
            p.hero-kicker { "We're getting married" }
            h1 {
                (invitation.groom)
                span.amp { " & " }
                (invitation.bride)
            }
            p.hero-date { (invitation.date) }
        }
    }
}

fn render_section(ctx: &PageContext<'_>, placed: &PlacedSection, rng: &mut impl Rng) -> Markup {
    let invitation = &ctx.config.invitation;
    let body = match placed.section {
        Section::Invitation => html! {
            h2 { "Invitation" }
            div.message { (PreEscaped(markdown(&invitation.message))) }
            p.signature { (invitation.groom) " · " (invitation.bride) }
        },
        Section::Date => html! {
            h2 { "When" }
            p.date { (invitation.date) }
        },
        Section::Venue => html! {
            h2 { "Where" }
            p.venue { (invitation.venue) }
            p.address { (invitation.address) }
        },
        Section::Gallery => render_gallery(ctx, rng),
        Section::Rsvp => html! {
            h2 { "RSVP" }
            p { "Please let us know if you can make it." }
            (button(ctx.gate, "rsvp", "Reply", None))
        },
        Section::Account => render_accounts(ctx.gate, &ctx.config.account.accounts),
    };
    html! {
        section id=(placed.section.id()) class={ "section bg-" (placed.background.as_str()) } {
            (body)
        }
    }
}

fn render_gallery(ctx: &PageContext<'_>, rng: &mut impl Rng) -> Markup {
    let items = gallery_items(ctx.gallery);
    html! {
        h2 { "Gallery" }
        @if items.is_empty() {
            p.gallery-empty { "Photos coming soon." }
        } @else {
            div.gallery-grid {
                @for item in &items {
                    (render_gallery_item(ctx.gate, item, rng))
                }
            }
        }
    }
}

fn render_gallery_item(gate: &EffectGate, item: &GalleryItem, rng: &mut impl Rng) -> Markup {
    let image = AnimatedImage::mount(gate, true, rng);
    let entrance = image.entrance();
    let emphasis = image.emphasis().css_vars();
    html! {
        a.gallery-item href=(item.display) target="_blank" rel="noopener"
            data-entrance=[entrance.map(|t| t.css_transition())]
            style=[entrance.map(|t| t.from.to_css())] {
            @if image.shows_spinner() {
                span.spinner aria-hidden="true" {}
            }
            img src=(item.thumb) alt="" loading="lazy"
                class=[emphasis.is_some().then_some("emphasis")]
                style=[emphasis];
            @if image.shows_enlarge_hint() {
                span.enlarge-hint { "Tap to enlarge" }
            }
        }
    }
}

fn render_accounts(gate: &EffectGate, accounts: &[GiftAccount]) -> Markup {
    html! {
        h2 { "Gifts" }
        ul.accounts {
            @for account in accounts {
                li {
                    span.bank { (account.bank) }
                    span.number { (account.number) }
                    span.holder { (account.holder) }
                    (button(gate, "copy", "Copy", Some(&account.number)))
                }
            }
        }
    }
}

fn button(gate: &EffectGate, action: &str, label: &str, copy: Option<&str>) -> Markup {
    let emphasis = Emphasis::button(gate).css_vars();
    let class = if emphasis.is_some() { "btn emphasis" } else { "btn" };
    html! {
        button type="button"
            class=(class)
            style=[emphasis]
            data-action=(action)
            data-copy=[copy] {
            (label)
        }
    }
}

fn render_footer(ctx: &PageContext<'_>) -> Markup {
    let invitation = &ctx.config.invitation;
    html! {
        footer.footer {
            p { (invitation.groom) " & " (invitation.bride) }
        }
    }
}

fn render_particles(field: &ParticleField, rng: &mut impl Rng) -> Markup {
    let rendered = field.render(rng);
    html! {
        div class={ "particles particles-" (rendered.style.as_str()) }
            data-particles=(rendered.style.as_str())
            data-generation=(rendered.generation)
            data-interval=(REGENERATION_INTERVAL.as_secs())
            aria-hidden="true" {
            @for particle in &rendered.particles {
                span.particle style=(particle.element.css_vars()) { (particle.glyph) }
            }
        }
    }
}

fn markdown(source: &str) -> String {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(source));
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FallingStyle, GalleryPosition};
    use crate::effects::particles::ParticleGenerator;
    use crate::test_helpers::{all_off, all_on, gate_with};
    use crate::types::ResolvedSlot;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn live() -> GalleryResolution {
        GalleryResolution::Live(vec![
            ResolvedSlot {
                index: 1,
                display: Some("/images/gallery/image1.webp".into()),
                thumb: Some("/images/gallery/thumbs/image1.webp".into()),
            },
            ResolvedSlot {
                index: 2,
                display: None,
                thumb: Some("/images/gallery/thumbs/image2.webp".into()),
            },
            ResolvedSlot {
                index: 3,
                display: Some("/images/gallery/image3.jpg".into()),
                thumb: None,
            },
        ])
    }

    fn field(style: FallingStyle) -> ParticleField {
        ParticleGenerator::with_rng(style, StdRng::seed_from_u64(5)).regenerate()
    }

    fn render(config: &SiteConfig, gate: &EffectGate, particles: Option<&ParticleField>) -> String {
        let gallery = live();
        let ctx = PageContext {
            config,
            gate,
            gallery: &gallery,
            particles,
        };
        render_page(&ctx, &mut StdRng::seed_from_u64(0)).into_string()
    }

    #[test]
    fn gallery_items_skip_thumb_only_slots() {
        let items = gallery_items(&live());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].thumb, "/images/gallery/thumbs/image1.webp");
        assert_eq!(items[1].thumb, "/images/gallery/image3.jpg");
    }

    #[test]
    fn gallery_items_from_fallback() {
        let resolution = GalleryResolution::MissingDirectory {
            fallback: vec!["/a.jpg".into(), "/b.jpg".into()],
        };
        let items = gallery_items(&resolution);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].display, items[0].thumb);
    }

    #[test]
    fn page_includes_doctype_and_names() {
        let html = render(&SiteConfig::default(), &all_on(), None);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Groom &amp; Bride</title>"));
    }

    #[test]
    fn markdown_message_rendered() {
        let mut config = SiteConfig::default();
        config.invitation.message = "Join **us**".into();
        let html = render(&config, &all_on(), None);
        assert!(html.contains("<strong>us</strong>"));
    }

    #[test]
    fn sections_carry_alternating_backgrounds() {
        let html = render(&SiteConfig::default(), &all_on(), None);
        assert!(html.contains(r#"id="invitation" class="section bg-white""#));
        assert!(html.contains(r#"id="date" class="section bg-beige""#));
        assert!(html.contains(r#"id="gallery" class="section bg-beige""#));
    }

    #[test]
    fn gallery_position_bottom_renders_last() {
        let mut config = SiteConfig::default();
        config.gallery.position = GalleryPosition::Bottom;
        let html = render(&config, &all_on(), None);
        let gallery = html.find(r#"id="gallery""#).unwrap();
        let rsvp = html.find(r#"id="rsvp""#).unwrap();
        assert!(rsvp < gallery);
    }

    #[test]
    fn active_effects_emit_hooks() {
        let particles = field(FallingStyle::Hearts);
        let html = render(&SiteConfig::default(), &all_on(), Some(&particles));
        assert!(html.contains(r#"data-reveal="slideUp""#));
        assert!(html.contains(r#"data-reveal="scaleIn""#));
        assert!(html.contains("data-entrance=\""));
        assert!(html.contains("Tap to enlarge"));
        assert!(html.contains(r#"class="page-transition""#));
        assert!(html.contains(r#"data-particles="hearts""#));
        assert_eq!(html.matches(r#"class="particle""#).count(), 15);
    }

    #[test]
    fn disabled_effects_render_static() {
        let html = render(&SiteConfig::default(), &all_off(), None);
        assert!(!html.contains("data-reveal=\""));
        assert!(!html.contains("data-entrance=\""));
        assert!(!html.contains("data-particles=\""));
        assert!(!html.contains(r#"class="page-transition""#));
        assert!(!html.contains("Tap to enlarge"));
        assert!(!html.contains(r#"style="--hover-transform"#));
        assert!(!html.contains("@keyframes page-enter"));
    }

    #[test]
    fn scroll_toggle_only_removes_reveals() {
        let gate = gate_with(|c| c.scroll_animation = false);
        let html = render(&SiteConfig::default(), &gate, None);
        assert!(!html.contains("data-reveal=\""));
        assert!(html.contains("data-entrance=\""));
        assert!(html.contains(r#"class="page-transition""#));
    }

    #[test]
    fn accounts_get_copy_buttons() {
        let mut config = SiteConfig::default();
        config.account.enabled = true;
        config.account.accounts = vec![GiftAccount {
            bank: "First Bank".into(),
            number: "123-456".into(),
            holder: "Groom".into(),
        }];
        let html = render(&config, &all_on(), None);
        assert!(html.contains(r#"data-copy="123-456""#));
        assert!(html.contains("btn emphasis"));
    }

    #[test]
    fn inert_buttons_carry_no_emphasis() {
        let gate = gate_with(|c| c.button_animation = false);
        let html = render(&SiteConfig::default(), &gate, None);
        assert!(html.contains(r#"class="btn""#));
        assert!(!html.contains("btn emphasis"));
    }

    #[test]
    fn staggered_children() {
        let html = render(&SiteConfig::default(), &all_on(), None);
        assert!(html.contains("animation-delay:0s"));
        assert!(html.contains("animation-delay:0.1s"));
    }
}
