//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Gallery
//!
//! ```text
//! Gallery (public/images/gallery)
//! 001 image1
//!     Display: /images/gallery/image1.webp
//!     Thumb: /images/gallery/thumbs/image1.webp
//! 003 image3
//!     Thumb: /images/gallery/image3.jpg
//!
//! Ignored
//!     notes.txt
//!
//! Resolved 2 of 9 slots
//! ```
//!
//! When the directory is missing or unreadable, the fallback list is shown
//! instead of slots.
//!
//! ## Check
//!
//! ```text
//! Sections
//! 001 invitation (white, slideUp +0.1s)
//! 002 date (beige, fadeIn +0.2s)
//! ...
//!     footer (fadeIn +0.1s)
//!
//! Effects
//!     page_transition: on
//!     falling_elements: petals
//! ```

use crate::effects::reveal::RevealOptions;
use crate::effects::{Capability, EffectGate};
use crate::gallery::GalleryResolution;
use crate::naming::{SlotFormat, slot_filename};
use crate::sections::SectionLayout;
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Slot stem without extension, e.g. `image3`.
fn slot_stem(index: u32) -> String {
    let name = slot_filename(index, SlotFormat::Webp);
    name.trim_end_matches(&format!(".{}", SlotFormat::Webp.extension()))
        .to_string()
}

fn reveal_detail(options: &RevealOptions) -> String {
    format!(
        "{} +{}s",
        options.animation.as_str(),
        options.delay.as_secs_f64()
    )
}

// ============================================================================
// Gallery
// ============================================================================

pub fn format_gallery_output(
    resolution: &GalleryResolution,
    base_dir: &Path,
    slot_count: u32,
    ignored: &[String],
) -> Vec<String> {
    let mut lines = vec![format!("Gallery ({})", base_dir.display())];

    match resolution {
        GalleryResolution::Live(slots) => {
            for slot in slots {
                lines.push(format!(
                    "{} {}",
                    format_index(slot.index as usize),
                    slot_stem(slot.index)
                ));
                if let Some(display) = &slot.display {
                    lines.push(format!("{}Display: {}", indent(1), display));
                }
                if let Some(thumb) = &slot.thumb {
                    lines.push(format!("{}Thumb: {}", indent(1), thumb));
                }
            }
            if !ignored.is_empty() {
                lines.push(String::new());
                lines.push("Ignored".to_string());
                for name in ignored {
                    lines.push(format!("{}{}", indent(1), name));
                }
            }
            lines.push(String::new());
            lines.push(format!("Resolved {} of {} slots", slots.len(), slot_count));
        }
        GalleryResolution::MissingDirectory { fallback } => {
            lines.push(format!("{}Directory missing", indent(1)));
            push_fallback(&mut lines, fallback);
        }
        GalleryResolution::Failed { error, fallback } => {
            lines.push(format!("{}Read failed: {}", indent(1), error));
            push_fallback(&mut lines, fallback);
        }
    }
    lines
}

fn push_fallback(lines: &mut Vec<String>, fallback: &[String]) {
    lines.push(String::new());
    lines.push(format!("Fallback ({} images)", fallback.len()));
    for (i, url) in fallback.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), url));
    }
}

pub fn print_gallery_output(
    resolution: &GalleryResolution,
    base_dir: &Path,
    slot_count: u32,
    ignored: &[String],
) {
    for line in format_gallery_output(resolution, base_dir, slot_count, ignored) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(layout: &SectionLayout, gate: &EffectGate) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];
    for (i, placed) in layout.sections.iter().enumerate() {
        lines.push(format!(
            "{} {} ({}, {})",
            format_index(i + 1),
            placed.section.id(),
            placed.background.as_str(),
            reveal_detail(&placed.reveal)
        ));
    }
    lines.push(format!("{}footer ({})", indent(1), reveal_detail(&layout.footer)));

    lines.push(String::new());
    lines.push("Effects".to_string());
    let config = gate.config();
    if !config.enabled {
        lines.push(format!("{}enabled: off (all effects off)", indent(1)));
    }
    for capability in Capability::ALL {
        let state = match (capability, gate.is_active(capability)) {
            (Capability::FallingElements, true) => config.falling_elements.as_str(),
            (_, true) => "on",
            (_, false) => "off",
        };
        lines.push(format!("{}{}: {}", indent(1), capability.key(), state));
    }
    lines
}

pub fn print_check_output(layout: &SectionLayout, gate: &EffectGate) {
    for line in format_check_output(layout, gate) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
