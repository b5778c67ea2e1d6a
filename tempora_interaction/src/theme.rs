// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizes and colors for the interaction primitives.

use peniko::Color;
use peniko::color::Rgba8;

/// Visual parameters shared by the scrubber and minimap.
#[derive(Clone, Copy, Debug)]
pub struct InteractionTheme {
    /// Height of scrubber and minimap tracks.
    pub track_height: f64,
    /// Radius of the scrubber thumb.
    pub thumb_radius: f64,
    /// Width of a minimap event marker.
    pub marker_width: f64,
    /// Smallest width the minimap viewport indicator is drawn at.
    pub indicator_min_width: f64,
    /// Track background.
    pub track: Rgba8,
    /// Thumb, progress fill and indicator outline.
    pub accent: Rgba8,
    /// Minimap event markers.
    pub marker: Rgba8,
}

impl Default for InteractionTheme {
    fn default() -> Self {
        Self {
            track_height: 6.0,
            thumb_radius: 8.0,
            marker_width: 2.0,
            indicator_min_width: 12.0,
            track: Rgba8 {
                r: 0x33,
                g: 0x33,
                b: 0x3d,
                a: 0xff,
            },
            accent: Rgba8 {
                r: 0xd4,
                g: 0xa3,
                b: 0x73,
                a: 0xff,
            },
            marker: Rgba8 {
                r: 0x9c,
                g: 0xa3,
                b: 0xaf,
                a: 0xb3,
            },
        }
    }
}

/// Converts a theme color for a Peniko renderer.
#[must_use]
pub fn to_color(rgba: Rgba8) -> Color {
    Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
}
