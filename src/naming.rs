//! Filename convention for gallery slots.
//!
//! Every slot is a fixed numbered position. Its files are named `image{N}`
//! with a format extension:
//!
//! - `image1.webp` → slot 1, WebP (preferred)
//! - `image1.jpg` → slot 1, JPEG
//! - `thumbs/image1.webp` → slot 1 thumbnail (thumbnails are WebP only)
//!
//! Matching is exact and case-sensitive, the same way a static file server
//! would resolve the URL.

/// Image formats the resolver understands, in preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotFormat {
    Webp,
    Jpg,
}

impl SlotFormat {
    /// Display preference order: first match wins.
    pub const PREFERENCE: [SlotFormat; 2] = [SlotFormat::Webp, SlotFormat::Jpg];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Webp => "webp",
            Self::Jpg => "jpg",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "webp" => Some(Self::Webp),
            "jpg" => Some(Self::Jpg),
            _ => None,
        }
    }
}

/// Build the filename for a slot: `slot_filename(3, SlotFormat::Jpg)` → `image3.jpg`.
pub fn slot_filename(index: u32, format: SlotFormat) -> String {
    format!("image{index}.{}", format.extension())
}

/// Parse a filename following the slot convention.
///
/// Returns `None` for anything that is not `image{N}.{webp|jpg}` with a
/// positive decimal `N` and no leading zeros (`image01.jpg` would never be
/// produced by [`slot_filename`], so it does not name a slot).
pub fn parse_slot_filename(name: &str) -> Option<(u32, SlotFormat)> {
    let (stem, ext) = name.rsplit_once('.')?;
    let format = SlotFormat::from_extension(ext)?;
    let digits = stem.strip_prefix("image")?;
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let index = digits.parse().ok()?;
    Some((index, format))
}
