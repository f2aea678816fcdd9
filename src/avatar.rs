use colored::*;
use image::imageops::FilterType;
use image::RgbImage;
use std::path::Path;

use crate::classifier::PoseLabel;
use crate::config::AssetConfig;
use crate::output;

/// The four avatar images, one per pose label, pre-scaled to the
/// configured pane width. Missing files are tolerated: the pane then
/// shows a placeholder box instead.
pub struct AvatarSet {
    raising_hand: Option<RgbImage>,
    thinking: Option<RgbImage>,
    shocking: Option<RgbImage>,
    default: Option<RgbImage>,
    pane_width: usize,
}

impl AvatarSet {
    pub fn load(assets: &AssetConfig, pane_width: usize) -> Self {
        Self {
            raising_hand: load_scaled(&assets.raising_hand(), pane_width, "raising_hand"),
            thinking: load_scaled(&assets.thinking(), pane_width, "thinking"),
            shocking: load_scaled(&assets.shocking(), pane_width, "shocking"),
            default: load_scaled(&assets.default_pose(), pane_width, "default"),
            pane_width,
        }
    }

    fn image(&self, label: PoseLabel) -> Option<&RgbImage> {
        match label {
            PoseLabel::RaisingHand => self.raising_hand.as_ref(),
            PoseLabel::Thinking => self.thinking.as_ref(),
            PoseLabel::Shocking => self.shocking.as_ref(),
            PoseLabel::Default => self.default.as_ref(),
        }
    }

    /// Blits the avatar for `label` into the top-right corner of the
    /// frame buffer. Without an image, draws a dimmed placeholder.
    pub fn draw(&self, buffer: &mut [u8], width: usize, height: usize, label: PoseLabel) {
        let pane_w = self.pane_width.min(width);
        let x0 = width - pane_w;

        match self.image(label) {
            Some(img) => {
                for (px, py, pixel) in img.enumerate_pixels() {
                    output::put_pixel(
                        buffer,
                        width,
                        height,
                        (x0 + px as usize) as i32,
                        py as i32,
                        (pixel[0], pixel[1], pixel[2]),
                    );
                }
            }
            None => {
                output::dim_rect(buffer, width, height, x0, 0, pane_w, pane_w);
            }
        }
    }
}

fn load_scaled(path: &Path, pane_width: usize, pose: &str) -> Option<RgbImage> {
    match image::open(path) {
        Ok(img) => {
            let scale = pane_width as f32 / img.width().max(1) as f32;
            let h = (img.height() as f32 * scale) as u32;
            let resized = img.resize_exact(pane_width as u32, h.max(1), FilterType::Triangle);
            println!("Loaded image for pose '{}': {}", pose, path.display());
            Some(resized.to_rgb8())
        }
        Err(_) => {
            eprintln!(
                "{}",
                format!("Image not found for pose '{}': {}", pose, path.display()).yellow()
            );
            None
        }
    }
}
