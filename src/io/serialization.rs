// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Content pack serialization and deserialization.
//!
//! This module handles exporting and importing presentation content in
//! YAML and JSON formats.

use crate::models::pack::ContentPack;
use anyhow::Result;
use std::path::Path;

/// Export a content pack to YAML format.
pub fn export_yaml(pack: &ContentPack, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(pack)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export a content pack to JSON format.
pub fn export_json(pack: &ContentPack, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(pack)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import a content pack from YAML format.
pub fn import_yaml(path: &Path) -> Result<ContentPack> {
    let yaml = std::fs::read_to_string(path)?;
    let pack = serde_yaml::from_str(&yaml)?;
    Ok(pack)
}

/// Import a content pack from JSON format.
pub fn import_json(path: &Path) -> Result<ContentPack> {
    let json = std::fs::read_to_string(path)?;
    let pack = serde_json::from_str(&json)?;
    Ok(pack)
}
