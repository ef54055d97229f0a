//! Responsive layout metrics
//!
//! Sizes for the video surface, progress bar and control row, derived from
//! the viewport reported by the scaling provider.

use crate::status::ProgressFraction;
use serde::{Deserialize, Serialize};

/// Share of the viewport's longer edge given to the video
const VIDEO_SHARE: f64 = 0.3;

/// Native aspect of the video surface (960x480)
const VIDEO_ASPECT: f64 = 480.0 / 960.0;

/// Share of the viewport width given to the control row
const CONTROLS_SHARE: f64 = 0.75;

/// Viewport metrics supplied by the scaling provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            scale: 1.0,
        }
    }
}

/// Computed sizes for every element on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    pub video_width: f64,
    pub video_height: f64,
    pub progress_height: f64,
    pub controls_width: f64,
    pub controls_margin: f64,
    pub button_margin: f64,
    pub button_padding: f64,
    pub button_radius: f64,
    pub font_size: f64,
}

impl ScreenLayout {
    /// Lay out the screen for `viewport`
    pub fn for_viewport(viewport: Viewport) -> Self {
        let Viewport {
            width,
            height,
            scale,
        } = viewport;

        // Landscape sizes off the width, portrait off the height
        let video_width = if height <= width {
            width * VIDEO_SHARE
        } else {
            height * VIDEO_SHARE
        };

        Self {
            video_width,
            video_height: video_width * VIDEO_ASPECT,
            progress_height: 5.0 * scale,
            controls_width: width * CONTROLS_SHARE,
            controls_margin: 50.0 * scale,
            button_margin: 20.0 * scale,
            button_padding: 10.0 * scale,
            button_radius: 5.0 * scale,
            font_size: 20.0 * scale,
        }
    }
}

/// Flex weights for the filled and remaining parts of the progress bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSplit {
    pub filled: f64,
    pub remaining: f64,
}

impl ProgressSplit {
    pub fn from_fraction(fraction: ProgressFraction) -> Self {
        let filled = fraction.value();
        Self {
            filled,
            remaining: 1.0 - filled,
        }
    }

    /// Render as a fixed-width text bar
    pub fn to_bar(self, width: usize) -> String {
        let filled = ((self.filled * width as f64).round() as usize).min(width);
        format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
    }
}
