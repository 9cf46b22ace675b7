//! Shared types serialized over the HTTP API.
//!
//! The gallery resolver produces them, the server sends them, and the CLI
//! prints them, so all three see the same shape.

use serde::{Deserialize, Serialize};

/// One gallery slot with whatever representations were found on disk.
///
/// `display` and `thumb` resolve independently: a slot can carry a
/// thumbnail with no full-size image. Slots with neither are never produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSlot {
    /// 1-based slot number (`image{index}`).
    pub index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
}

/// Body of `GET /api/gallery`.
///
/// `images` and `thumbs` are the append-only lists older clients consume.
/// They are not index-aligned when slots are sparse; `slots` is the
/// per-slot mapping that is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub images: Vec<String>,
    pub thumbs: Vec<String>,
    #[serde(default)]
    pub slots: Vec<ResolvedSlot>,
}
