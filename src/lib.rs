//! # Simple Invite
//!
//! A small server for a personal event invitation page. The page itself is
//! static content from `config.toml`; the two parts with real behavior are
//! the gallery resolver and the motion effects.
//!
//! # Architecture
//!
//! ```text
//! config.toml ──► SiteConfig (Arc, read-only)
//!                   │
//!                   ├─► GalleryResolver ──► GalleryResolution ──► /api/gallery, page
//!                   │
//!                   └─► EffectGate ──► reveal / transition / emphasis / image
//!                                  └─► ParticleLoop ──► /api/particles, page
//! ```
//!
//! The resolver and the effects never call into each other. The page
//! renderer is where their outputs meet.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation |
//! | [`gallery`] | Per-slot best-representation resolution with fallback |
//! | [`naming`] | `image{N}.{webp,jpg}` filename convention |
//! | [`types`] | Payload types shared by the resolver, server and CLI |
//! | [`effects`] | Capability gate and the animation state machines |
//! | [`sections`] | Active section order and background alternation |
//! | [`page`] | Maud rendering of the invitation page |
//! | [`server`] | Axum routes and cache headers |
//! | [`telemetry`] | `tracing` subscriber setup |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Resolve On Every Request
//!
//! Gallery files are swapped by deployments, not by this process. Listing
//! the directory per request keeps the result a pure function of what is on
//! disk, with no cache to invalidate. Nine slots is a handful of `stat`s.
//!
//! ## Fail Open
//!
//! Every effect degrades to "no effect": a disabled capability renders its
//! region at rest with no hooks for the client script. A gallery read
//! failure still serves the configured image list, flagged with a 500 so
//! it shows up in monitoring.
//!
//! ## Sparse Slots
//!
//! The older `images`/`thumbs` arrays drift out of alignment when some
//! slots are missing. Payloads also carry `slots`, one entry per slot index,
//! so clients can pair display and thumbnail reliably.

pub mod config;
pub mod effects;
pub mod gallery;
pub mod naming;
pub mod output;
pub mod page;
pub mod sections;
pub mod server;
pub mod telemetry;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
