use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::classifier::ThresholdConfig;
use crate::text::Language;

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub camera: CameraConfig,
    pub thresholds: ThresholdConfig,
    pub detection: DetectionConfig,
    pub ui: UiConfig,
    pub assets: AssetConfig,
    pub defaults: Defaults,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub device_id: u32,
    pub flip_horizontal: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fps: 40,
            device_id: 0,
            flip_horizontal: true,
        }
    }
}

/// Limits applied at the detector boundary, mirroring the capability's
/// own configuration surface.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub max_num_hands: usize,
    pub max_num_faces: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            max_num_hands: 2,
            max_num_faces: 1,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub window_title: String,
    pub panel_text_scale: usize,
    pub panel_color_hex: String, // e.g. "#FFFF00"
    pub pose_color_hex: String,
    pub landmark_color_hex: String,
    /// Avatar pane width in pixels, pinned to the right edge.
    pub avatar_width: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_title: "Pose Mimic".to_string(),
            panel_text_scale: 2,
            panel_color_hex: "#FFFF00".to_string(),
            pose_color_hex: "#00FF00".to_string(),
            landmark_color_hex: "#00FFFF".to_string(),
            avatar_width: 200,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub base_dir: PathBuf,
}

impl AssetConfig {
    pub fn raising_hand(&self) -> PathBuf {
        self.base_dir.join("raising_hand_pose.jpg")
    }

    pub fn shocking(&self) -> PathBuf {
        self.base_dir.join("shocking_pose.jpg")
    }

    pub fn thinking(&self) -> PathBuf {
        self.base_dir.join("thinking_pose.jpg")
    }

    pub fn default_pose(&self) -> PathBuf {
        self.base_dir.join("default_pose.jpg")
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("assets"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub show_landmarks: bool,
    pub show_debug_info: bool,
    pub default_language: Language,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            show_landmarks: true,
            show_debug_info: true,
            default_language: Language::Id,
        }
    }
}

impl AppConfig {
    const PATH: &'static str = "config.json";

    pub fn load() -> Result<Self> {
        let config = if Path::new(Self::PATH).exists() {
            let content = fs::read_to_string(Self::PATH)?;
            // Missing fields fall back to defaults via #[serde(default)]
            match serde_json::from_str::<AppConfig>(&content) {
                Ok(c) => {
                    println!("Loaded configuration from {}", Self::PATH);
                    c
                }
                Err(e) => {
                    eprintln!("Error parsing config: {}. Loading defaults.", e);
                    Self::default()
                }
            }
        } else {
            println!("Configuration file not found. Creating default at {}", Self::PATH);
            Self::default()
        };

        // Save back so new fields show up in the file
        config.save()?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::PATH, content)?;
        Ok(())
    }

    /// Frame period derived from the configured capture rate.
    pub fn frame_interval(&self) -> std::time::Duration {
        let fps = self.camera.fps.max(1);
        std::time::Duration::from_micros(1_000_000 / fps as u64)
    }
}

/// Parses "#RRGGBB" into an RGB triple; anything else falls back to white.
pub fn parse_hex(hex: &str) -> (u8, u8, u8) {
    if hex.len() == 7 && hex.starts_with('#') {
        let r = u8::from_str_radix(&hex[1..3], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[3..5], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[5..7], 16).unwrap_or(255);
        (r, g, b)
    } else {
        (255, 255, 255)
    }
}
