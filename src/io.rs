//! I/O helpers for track JSON and the reference map image.
//!
//! - `parse_track_str` / `load_track`: parse, validate and deserialize a track.
//! - `track_to_json`: serialize a track with four-space indentation.
//! - `write_json_file`: write a serializable value to disk.
//! - `map_image_size`: read the pixel dimensions of the map image.
use crate::track::validate_track_value;
use crate::types::TrackData;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse a track document, rejecting structurally invalid data.
pub fn parse_track_str(text: &str) -> Result<TrackData, String> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| format!("Invalid JSON text: {e}"))?;
    validate_track_value(&value).map_err(|e| e.to_string())?;
    serde_json::from_value(value).map_err(|e| format!("Failed to decode track: {e}"))
}

/// Load and validate a track file.
pub fn load_track(path: &Path) -> Result<TrackData, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read track {}: {e}", path.display()))?;
    parse_track_str(&text).map_err(|e| format!("{}: {e}", path.display()))
}

/// Serialize a track the way the editor exports it (four-space indent).
pub fn track_to_json(track: &TrackData) -> Result<String, String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    track
        .serialize(&mut ser)
        .map_err(|e| format!("Failed to serialize track: {e}"))?;
    String::from_utf8(buf).map_err(|e| format!("Serialized track is not UTF-8: {e}"))
}

/// Write an exported track to `path`, creating parent directories.
pub fn write_track_file(path: &Path, track: &TrackData) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = track_to_json(track)?;
    fs::write(path, json).map_err(|e| format!("Failed to write track {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// Width and height of the map image in pixels, without decoding it.
pub fn map_image_size(path: &Path) -> Result<(u32, u32), String> {
    image::image_dimensions(path)
        .map_err(|e| format!("Failed to read map image {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
