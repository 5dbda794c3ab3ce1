//! JSON runtime configuration for the `track_align` tool.

use crate::io::map_image_size;
use crate::reference::{CanvasSize, MapReference};
use crate::types::Vector2;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Reference map image; its pixel size is the default canvas size.
    pub image: Option<PathBuf>,
    pub canvas_width: Option<f64>,
    pub canvas_height: Option<f64>,
    pub device_pixel_ratio: Option<f64>,
    /// World corners clockwise from top-left. Defaults to the bundled map.
    pub world_corners: Option<[Vector2; 4]>,
}

impl MapConfig {
    pub fn reference(&self) -> MapReference {
        match self.world_corners {
            Some(world_corners) => MapReference { world_corners },
            None => MapReference::default(),
        }
    }

    /// Explicit canvas size, else the map image size, else 1000x1000.
    pub fn resolve_canvas(&self) -> Result<CanvasSize, String> {
        let mut canvas = CanvasSize::default();
        if let Some(path) = &self.image {
            let (w, h) = map_image_size(path)?;
            canvas.width = w as f64;
            canvas.height = h as f64;
        }
        if let Some(w) = self.canvas_width {
            canvas.width = w;
        }
        if let Some(h) = self.canvas_height {
            canvas.height = h;
        }
        if let Some(dpr) = self.device_pixel_ratio {
            canvas.device_pixel_ratio = dpr;
        }
        if !(canvas.width > 0.0 && canvas.height > 0.0) {
            return Err(format!(
                "Canvas size must be positive, got {}x{}",
                canvas.width, canvas.height
            ));
        }
        Ok(canvas)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Run the orientation correction pass.
    pub enabled: bool,
    /// Refuse tracks with pitch or roll instead of ignoring it.
    pub strict: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            strict: false,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AlignOutputConfig {
    pub format: OutputFormat,
    /// Corrected track, in the editor's export layout.
    pub track_json: Option<PathBuf>,
    /// Per-waypoint correction report and canvas positions.
    pub report_json: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AlignConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub output: AlignOutputConfig,
}

pub fn parse_config(text: &str) -> Result<AlignConfig, String> {
    serde_json::from_str(text).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<AlignConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("{}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(r#"{ "input": "track.json" }"#).unwrap();
        assert_eq!(cfg.input, PathBuf::from("track.json"));
        assert!(cfg.normalize.enabled);
        assert!(!cfg.normalize.strict);
        assert_eq!(cfg.output.format, OutputFormat::Text);
        assert_eq!(cfg.map.reference(), MapReference::default());
        assert_eq!(cfg.map.resolve_canvas().unwrap(), CanvasSize::default());
    }

    #[test]
    fn explicit_map_settings() {
        let cfg = parse_config(
            r#"{
                "input": "t.json",
                "map": {
                    "canvas_width": 800,
                    "canvas_height": 600,
                    "device_pixel_ratio": 2,
                    "world_corners": [
                        { "x": 0, "y": 0 }, { "x": 1, "y": 0 },
                        { "x": 1, "y": 1 }, { "x": 0, "y": 1 }
                    ]
                },
                "normalize": { "enabled": false, "strict": true },
                "output": { "format": "both", "track_json": "out/track.json" }
            }"#,
        )
        .unwrap();
        let canvas = cfg.map.resolve_canvas().unwrap();
        assert_eq!(canvas.physical(), (1600.0, 1200.0));
        assert_eq!(cfg.map.reference().world_corners[2], Vector2::new(1.0, 1.0));
        assert!(!cfg.normalize.enabled);
        assert!(cfg.normalize.strict);
        assert!(cfg.output.format.includes_text() && cfg.output.format.includes_json());
    }

    #[test]
    fn rejects_zero_canvas() {
        let cfg = parse_config(r#"{ "input": "t.json", "map": { "canvas_width": 0 } }"#).unwrap();
        assert!(cfg.map.resolve_canvas().is_err());
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("track_align_config_{name}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn load_config_reports_parse_errors_like_parse_config() {
        let dir = scratch_dir("bad_json");
        let path = dir.join("align.json");
        fs::write(&path, r#"{ "input": 3 }"#).unwrap();

        let from_text = parse_config(r#"{ "input": 3 }"#).unwrap_err();
        let from_file = load_config(&path).unwrap_err();
        assert!(from_file.contains(&path.display().to_string()), "{from_file}");
        assert!(from_file.ends_with(&from_text), "{from_file}");
        assert!(from_file.contains("Failed to parse config"), "{from_file}");

        fs::write(&path, r#"{ "input": "t.json" }"#).unwrap();
        assert_eq!(load_config(&path).unwrap().input, PathBuf::from("t.json"));
    }

    #[test]
    fn canvas_defaults_to_map_image_size() {
        let dir = scratch_dir("map_png");
        let image = dir.join("map.png");
        image::RgbImage::new(3, 2).save(&image).unwrap();

        let map = MapConfig {
            image: Some(image.clone()),
            ..MapConfig::default()
        };
        let canvas = map.resolve_canvas().unwrap();
        assert_eq!((canvas.width, canvas.height), (3.0, 2.0));
        assert_eq!(canvas.device_pixel_ratio, 1.0);

        let map = MapConfig {
            image: Some(image),
            canvas_width: Some(30.0),
            ..MapConfig::default()
        };
        assert_eq!(map.resolve_canvas().unwrap().width, 30.0);

        let missing = MapConfig {
            image: Some(dir.join("missing.png")),
            ..MapConfig::default()
        };
        let err = missing.resolve_canvas().unwrap_err();
        assert!(err.starts_with("Failed to read map image"), "{err}");
    }
}
