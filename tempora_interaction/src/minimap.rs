// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scaled overview of a wide content strip with a draggable viewport indicator.
//!
//! Coordinates come in two spaces:
//! - **content space**: `0..content_width`, where the view scrolls;
//! - **track space**: `0..track_width`, the minimap itself.
//!
//! The caller owns the scroll offset (the content-space x of the viewport's
//! left edge). Clicking the track centers the viewport on the clicked point;
//! dragging the indicator moves the viewport by the pointer's movement scaled
//! back to content space, so grabbing the indicator off-center never makes it
//! jump.
//!
//! ```
//! use tempora_interaction::{Minimap, MinimapDrag, NoCapture};
//!
//! let minimap = Minimap::new(2000.0, 500.0, 200.0);
//! let mut drag = MinimapDrag::new(NoCapture);
//!
//! // Grab the indicator at track x = 30 while scrolled to 100.
//! drag.begin(30.0, 100.0);
//! // Moving 10 track pixels scrolls 100 content pixels.
//! assert_eq!(drag.drag_to(&minimap, 40.0), Some(200.0));
//! drag.end();
//! ```

use kurbo::{Point, Rect};

use crate::drag::{DragSession, PointerCapture};
use crate::theme::InteractionTheme;

/// Geometry of a minimap over a horizontally scrolling view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Minimap {
    /// Full width of the content.
    pub content_width: f64,
    /// Width of the visible part of the content.
    pub viewport_width: f64,
    /// Width of the minimap track.
    pub track_width: f64,
}

impl Minimap {
    /// Creates a minimap; negative widths are treated as zero.
    #[must_use]
    pub fn new(content_width: f64, viewport_width: f64, track_width: f64) -> Self {
        Self {
            content_width: content_width.max(0.0),
            viewport_width: viewport_width.max(0.0),
            track_width: track_width.max(0.0),
        }
    }

    /// Track pixels per content pixel; zero when there is no content.
    #[must_use]
    pub fn scale(&self) -> f64 {
        if self.content_width <= 0.0 {
            0.0
        } else {
            self.track_width / self.content_width
        }
    }

    /// Largest scroll offset that keeps the viewport inside the content.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Clamps a scroll offset into `[0, max_scroll]`.
    #[must_use]
    pub fn clamp_scroll(&self, scroll: f64) -> f64 {
        if scroll.is_nan() {
            return 0.0;
        }
        scroll.clamp(0.0, self.max_scroll())
    }

    /// Maps a content-space x to track space.
    #[must_use]
    pub fn content_to_track(&self, content_x: f64) -> f64 {
        content_x * self.scale()
    }

    /// Maps a track-space x to content space; zero for an empty track.
    #[must_use]
    pub fn track_to_content(&self, track_x: f64) -> f64 {
        let scale = self.scale();
        if scale <= 0.0 { 0.0 } else { track_x / scale }
    }

    /// Track-space x of each content-space marker position.
    pub fn markers<'a>(&self, content_xs: &'a [f64]) -> impl Iterator<Item = f64> + 'a {
        let scale = self.scale();
        let track_width = self.track_width;
        content_xs
            .iter()
            .map(move |x| (x * scale).clamp(0.0, track_width))
    }

    /// Track-space `(x, width)` of the viewport indicator at `scroll`.
    #[must_use]
    pub fn indicator(&self, scroll: f64) -> (f64, f64) {
        let scroll = self.clamp_scroll(scroll);
        let visible = self.viewport_width.min(self.content_width);
        (self.content_to_track(scroll), self.content_to_track(visible))
    }

    /// Indicator bounds, widened to the theme's minimum width.
    #[must_use]
    pub fn indicator_rect(&self, scroll: f64, top: f64, theme: &InteractionTheme) -> Rect {
        let (x, width) = self.indicator(scroll);
        let width = width.max(theme.indicator_min_width).min(self.track_width);
        let x = x.min(self.track_width - width).max(0.0);
        Rect::new(x, top, x + width, top + theme.track_height)
    }

    /// Bounds of the marker for a content-space x, centered on its track x.
    #[must_use]
    pub fn marker_rect(&self, content_x: f64, top: f64, theme: &InteractionTheme) -> Rect {
        let x = self.content_to_track(content_x).clamp(0.0, self.track_width);
        let half = theme.marker_width * 0.5;
        Rect::new(x - half, top, x + half, top + theme.track_height)
    }

    /// Scroll offset that centers the viewport on a clicked track x, clamped.
    #[must_use]
    pub fn navigate_to(&self, track_x: f64) -> f64 {
        let track_x = track_x.clamp(0.0, self.track_width);
        self.clamp_scroll(self.track_to_content(track_x) - self.viewport_width * 0.5)
    }

    /// Returns `true` if the content fits without scrolling.
    #[must_use]
    pub fn fits(&self) -> bool {
        self.max_scroll() <= 0.0
    }
}

/// Drag handling for the minimap indicator.
#[derive(Debug)]
pub struct MinimapDrag<C: PointerCapture> {
    session: DragSession<C>,
    start_scroll: f64,
}

impl<C: PointerCapture> MinimapDrag<C> {
    /// Creates an idle drag.
    pub fn new(capture: C) -> Self {
        Self {
            session: DragSession::new(capture),
            start_scroll: 0.0,
        }
    }

    /// Pointer down on the indicator at track x, with the current scroll.
    pub fn begin(&mut self, track_x: f64, scroll: f64) {
        self.start_scroll = scroll;
        self.session.begin(Point::new(track_x, 0.0));
    }

    /// Global pointer move. Returns the new scroll offset while dragging.
    pub fn drag_to(&mut self, minimap: &Minimap, track_x: f64) -> Option<f64> {
        let pos = Point::new(track_x, 0.0);
        self.session.update(pos)?;
        let offset = self.session.total_offset(pos)?;
        Some(minimap.clamp_scroll(self.start_scroll + minimap.track_to_content(offset.x)))
    }

    /// Pointer up. Returns `true` if a drag ended.
    pub fn end(&mut self) -> bool {
        self.session.end()
    }

    /// Returns `true` while the indicator is held.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }
}
