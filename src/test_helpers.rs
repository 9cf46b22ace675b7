//! Shared test utilities for the simple-invite test suite.
//!
//! Provides gallery fixture builders, an [`AssetSource`] that fails on
//! demand, and shortcuts for building effect gates.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_gallery(tmp.path(), &["image1.webp"], Some(&["image1.webp"]));
//! let resolution = GalleryResolver::new(&gallery_config(tmp.path())).resolve();
//! ```

use std::io;
use std::path::Path;

use crate::config::{EffectsConfig, SiteConfig};
use crate::effects::EffectGate;
use crate::gallery::{AssetSource, THUMBS_DIR};

// =========================================================================
// Gallery fixtures
// =========================================================================

/// Site config whose content root is `root`.
pub fn gallery_config(root: &Path) -> SiteConfig {
    SiteConfig {
        content_root: root.to_string_lossy().into_owned(),
        ..SiteConfig::default()
    }
}

/// Create `root/images/gallery` with the given placeholder files.
///
/// `thumbs: None` leaves the thumbs directory absent; `Some(&[])` creates it
/// empty. File contents are irrelevant to resolution.
pub fn write_gallery(root: &Path, files: &[&str], thumbs: Option<&[&str]>) {
    let dir = root.join("images").join("gallery");
    std::fs::create_dir_all(&dir).unwrap();
    for name in files {
        std::fs::write(dir.join(name), "fake image").unwrap();
    }
    if let Some(thumbs) = thumbs {
        let thumbs_dir = dir.join(THUMBS_DIR);
        std::fs::create_dir_all(&thumbs_dir).unwrap();
        for name in thumbs {
            std::fs::write(thumbs_dir.join(name), "fake thumb").unwrap();
        }
    }
}

/// Source where every directory exists and one listing fails.
pub struct FailingSource {
    fail_thumbs: bool,
}

impl FailingSource {
    /// Listing the base directory fails.
    pub fn base() -> Self {
        Self { fail_thumbs: false }
    }

    /// Base lists fine (with `image1.jpg`); the thumbs listing fails.
    pub fn thumbs() -> Self {
        Self { fail_thumbs: true }
    }
}

impl AssetSource for FailingSource {
    fn exists(&self, _dir: &Path) -> bool {
        true
    }

    fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        let is_thumbs = dir.file_name().is_some_and(|n| n == THUMBS_DIR);
        if is_thumbs == self.fail_thumbs {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ))
        } else {
            Ok(vec!["image1.jpg".to_string()])
        }
    }
}

// =========================================================================
// Effect gates
// =========================================================================

/// Gate with every capability on.
pub fn all_on() -> EffectGate {
    EffectGate::new(EffectsConfig::default())
}

/// Gate with every capability off.
pub fn all_off() -> EffectGate {
    EffectGate::new(EffectsConfig::disabled())
}

/// Gate built from the defaults with one modification applied.
pub fn gate_with(f: impl FnOnce(&mut EffectsConfig)) -> EffectGate {
    let mut config = EffectsConfig::default();
    f(&mut config);
    EffectGate::new(config)
}
