// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Slide photograph loading.
//!
//! This module decodes image files into RGBA pixel buffers suitable for
//! upload as egui textures. Decoding happens off the UI thread (see the
//! loader in `app.rs`); a failed decode is cosmetic and leaves the painted
//! placeholder in place.

use anyhow::{Context, Result};
use std::path::Path;

/// A decoded image ready for texture upload.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major.
    pub pixels: Vec<u8>,
}

/// Decode an image file to RGBA pixels.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to decode image {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LoadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
