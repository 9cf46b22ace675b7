//! Gallery asset resolution.
//!
//! For each numbered slot, picks the best representation that actually
//! exists on disk. The directory is re-listed on every call: the result is a
//! pure projection of the current file set, so there is nothing to
//! invalidate when images are swapped between deployments.
//!
//! ## Preference Order
//!
//! ```text
//! display:  image{N}.webp  →  image{N}.jpg  →  (no entry)
//! thumb:    thumbs/image{N}.webp  →  image{N}.webp  →  image{N}.jpg  →  (no entry)
//! ```
//!
//! The two orders are evaluated independently, so a slot may have a
//! thumbnail but no display image.
//!
//! ## Degradation
//!
//! | Situation | Result |
//! |-----------|--------|
//! | Slot has no files | slot skipped, not an error |
//! | Base directory missing | configured fallback list, empty thumbs, success |
//! | Listing fails (permissions, I/O) | fallback list, empty thumbs, flagged failure |
//!
//! A response is always usable; the failure flag only tells the caller to
//! log and report a 500.

use crate::config::SiteConfig;
use crate::naming::{SlotFormat, parse_slot_filename, slot_filename};
use crate::types::{GalleryPayload, ResolvedSlot};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// URL prefix the gallery directory is served under.
pub const GALLERY_URL_PREFIX: &str = "/images/gallery";
/// Thumbnail subdirectory name, both on disk and in URLs.
pub const THUMBS_DIR: &str = "thumbs";

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("failed to list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Directory listing seam.
///
/// Production uses [`FsSource`]; tests substitute sources that fail on
/// demand.
pub trait AssetSource: Send + Sync {
    /// Whether anything exists at `dir`. A non-directory entry counts, so
    /// the following `list` reports the failure.
    fn exists(&self, dir: &Path) -> bool;

    /// File names directly inside `dir`.
    fn list(&self, dir: &Path) -> io::Result<Vec<String>>;
}

/// Reads the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl AssetSource for FsSource {
    fn exists(&self, dir: &Path) -> bool {
        dir.exists()
    }

    fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

/// Filenames present in the gallery directory and its `thumbs` child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFileSet {
    base: BTreeSet<String>,
    thumbs: BTreeSet<String>,
}

impl CandidateFileSet {
    pub fn new<B, T>(base: B, thumbs: T) -> Self
    where
        B: IntoIterator,
        B::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            base: base.into_iter().map(Into::into).collect(),
            thumbs: thumbs.into_iter().map(Into::into).collect(),
        }
    }

    /// List `base_dir` and `base_dir/thumbs`.
    ///
    /// Returns `Ok(None)` when `base_dir` does not exist. A missing thumbs
    /// directory is an empty set, not an error.
    pub fn read(source: &dyn AssetSource, base_dir: &Path) -> Result<Option<Self>, GalleryError> {
        if !source.exists(base_dir) {
            return Ok(None);
        }
        let base = source.list(base_dir).map_err(|e| GalleryError::Io {
            path: base_dir.to_path_buf(),
            source: e,
        })?;

        let thumbs_dir = base_dir.join(THUMBS_DIR);
        let thumbs = if source.exists(&thumbs_dir) {
            source.list(&thumbs_dir).map_err(|e| GalleryError::Io {
                path: thumbs_dir.clone(),
                source: e,
            })?
        } else {
            Vec::new()
        };

        Ok(Some(Self::new(base, thumbs)))
    }

    /// Best full-size file for a slot: WebP, then JPEG.
    fn display_file(&self, index: u32) -> Option<String> {
        SlotFormat::PREFERENCE
            .iter()
            .map(|&format| slot_filename(index, format))
            .find(|name| self.base.contains(name))
    }

    /// Display URL for a slot, if any base file exists.
    pub fn display_url(&self, index: u32) -> Option<String> {
        self.display_file(index)
            .map(|name| format!("{GALLERY_URL_PREFIX}/{name}"))
    }

    /// Thumbnail URL for a slot: the dedicated WebP thumbnail, else the
    /// full-size display file.
    pub fn thumb_url(&self, index: u32) -> Option<String> {
        let thumb = slot_filename(index, SlotFormat::Webp);
        if self.thumbs.contains(&thumb) {
            return Some(format!("{GALLERY_URL_PREFIX}/{THUMBS_DIR}/{thumb}"));
        }
        self.display_url(index)
    }

    /// Base and thumbnail files that do not name a slot in `1..=slot_count`.
    ///
    /// Thumbnails are WebP only, so a `thumbs/image1.jpg` is reported too.
    /// The `thumbs` directory entry itself is not a stray file.
    pub fn ignored(&self, slot_count: u32) -> Vec<String> {
        let in_range = |index: u32| (1..=slot_count).contains(&index);
        let base = self.base.iter().filter(|name| {
            name.as_str() != THUMBS_DIR
                && !matches!(parse_slot_filename(name), Some((i, _)) if in_range(i))
        });
        let thumbs = self
            .thumbs
            .iter()
            .filter(|name| {
                !matches!(parse_slot_filename(name), Some((i, SlotFormat::Webp)) if in_range(i))
            })
            .map(|name| format!("{THUMBS_DIR}/{name}"));
        base.cloned().chain(thumbs).collect()
    }
}

/// Resolve every slot in `1..=slot_count` against a file set.
///
/// Slots with neither a display nor a thumbnail are omitted.
pub fn resolve_slots(files: &CandidateFileSet, slot_count: u32) -> Vec<ResolvedSlot> {
    (1..=slot_count)
        .filter_map(|index| {
            let display = files.display_url(index);
            let thumb = files.thumb_url(index);
            if display.is_none() && thumb.is_none() {
                return None;
            }
            Some(ResolvedSlot {
                index,
                display,
                thumb,
            })
        })
        .collect()
}

/// Outcome of one resolution request.
#[derive(Debug)]
pub enum GalleryResolution {
    /// Directory listed; the sparse slot mapping.
    Live(Vec<ResolvedSlot>),
    /// Base directory absent; serve the configured list.
    MissingDirectory { fallback: Vec<String> },
    /// Listing failed; serve the configured list and report the error.
    Failed {
        error: GalleryError,
        fallback: Vec<String>,
    },
}

impl GalleryResolution {
    /// Resolved slots. Empty for both fallback outcomes.
    pub fn slots(&self) -> &[ResolvedSlot] {
        match self {
            Self::Live(slots) => slots,
            _ => &[],
        }
    }

    /// Append-only display list: one entry per slot that has a display file,
    /// or the fallback list.
    pub fn display_urls(&self) -> Vec<String> {
        match self {
            Self::Live(slots) => slots.iter().filter_map(|s| s.display.clone()).collect(),
            Self::MissingDirectory { fallback } | Self::Failed { fallback, .. } => {
                fallback.clone()
            }
        }
    }

    /// Append-only thumbnail list. Not index-aligned with
    /// [`display_urls`](Self::display_urls) when slots are sparse.
    pub fn thumb_urls(&self) -> Vec<String> {
        self.slots()
            .iter()
            .filter_map(|s| s.thumb.clone())
            .collect()
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Wire representation for `GET /api/gallery`.
    pub fn to_payload(&self) -> GalleryPayload {
        GalleryPayload {
            error: self
                .is_failure()
                .then(|| "Failed to load gallery images".to_string()),
            images: self.display_urls(),
            thumbs: self.thumb_urls(),
            slots: self.slots().to_vec(),
        }
    }
}

/// Resolves the gallery directory of a site on demand.
///
/// Holds no state between calls apart from its immutable settings.
pub struct GalleryResolver {
    source: Box<dyn AssetSource>,
    base_dir: PathBuf,
    slot_count: u32,
    fallback: Vec<String>,
}

impl GalleryResolver {
    /// Resolver over the real filesystem, configured from the site config.
    pub fn new(config: &SiteConfig) -> Self {
        Self::with_source(config, Box::new(FsSource))
    }

    pub fn with_source(config: &SiteConfig, source: Box<dyn AssetSource>) -> Self {
        Self {
            source,
            base_dir: config.gallery_dir(),
            slot_count: config.gallery.slots,
            fallback: config.gallery.images.clone(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn slot_count(&self) -> u32 {
        self.slot_count
    }

    /// List the directory and resolve every slot.
    pub fn resolve(&self) -> GalleryResolution {
        self.inspect().0
    }

    /// Resolve, and also report the files that name no slot. Both come
    /// from the same listing; the ignored list is empty for fallbacks.
    pub fn inspect(&self) -> (GalleryResolution, Vec<String>) {
        match CandidateFileSet::read(self.source.as_ref(), &self.base_dir) {
            Ok(Some(files)) => {
                let slots = resolve_slots(&files, self.slot_count);
                tracing::debug!(
                    dir = %self.base_dir.display(),
                    resolved = slots.len(),
                    "gallery resolved"
                );
                (
                    GalleryResolution::Live(slots),
                    files.ignored(self.slot_count),
                )
            }
            Ok(None) => {
                tracing::warn!(
                    dir = %self.base_dir.display(),
                    "gallery directory missing, serving configured images"
                );
                let resolution = GalleryResolution::MissingDirectory {
                    fallback: self.fallback.clone(),
                };
                (resolution, Vec::new())
            }
            Err(error) => {
                tracing::error!(%error, "gallery resolution failed, serving configured images");
                let resolution = GalleryResolution::Failed {
                    error,
                    fallback: self.fallback.clone(),
                };
                (resolution, Vec::new())
            }
        }
    }
}
