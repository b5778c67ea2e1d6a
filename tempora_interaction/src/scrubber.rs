// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrubber and playback over a normalized position `t ∈ [0, 1]`.
//!
//! The caller owns `t`. A [`Scrubber`] converts pointer input into a new `t`:
//! a press seeks to the pointer and starts a drag, moves keep seeking while
//! the button is held (even when the pointer leaves the track), and a release
//! ends the drag.
//!
//! ```
//! use tempora_interaction::{NoCapture, Scrubber, ScrubberTrack};
//!
//! let mut scrubber = Scrubber::new(ScrubberTrack::new(100.0, 300.0), NoCapture);
//! let t = scrubber.press(150.0);
//! assert_eq!(t, 0.25);
//!
//! // Dragging past the end of the track pins to 1.
//! assert_eq!(scrubber.drag_to(900.0), Some(1.0));
//! scrubber.release();
//! assert_eq!(scrubber.drag_to(200.0), None);
//! ```

use kurbo::{Point, Rect};

use crate::drag::{DragSession, PointerCapture};
use crate::theme::InteractionTheme;

/// Horizontal extent of a scrubber track in view coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrubberTrack {
    /// Left edge.
    pub start: f64,
    /// Right edge.
    pub end: f64,
}

impl ScrubberTrack {
    /// Creates a track, swapping reversed edges.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Track length; zero for a degenerate track.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Maps a pointer x to `t`, clamped to `[0, 1]`.
    ///
    /// A zero-width track maps everything to `0`.
    #[must_use]
    pub fn position_at(&self, x: f64) -> f64 {
        let width = self.width();
        if width <= 0.0 || x.is_nan() {
            return 0.0;
        }
        ((x - self.start) / width).clamp(0.0, 1.0)
    }

    /// Maps `t` back to an x coordinate on the track.
    #[must_use]
    pub fn x_at(&self, t: f64) -> f64 {
        self.start + clamp_unit(t) * self.width()
    }
}

/// Pointer handling for a scrubber track.
#[derive(Debug)]
pub struct Scrubber<C: PointerCapture> {
    track: ScrubberTrack,
    drag: DragSession<C>,
}

impl<C: PointerCapture> Scrubber<C> {
    /// Creates a scrubber over `track`.
    pub fn new(track: ScrubberTrack, capture: C) -> Self {
        Self {
            track,
            drag: DragSession::new(capture),
        }
    }

    /// The track.
    #[must_use]
    pub fn track(&self) -> ScrubberTrack {
        self.track
    }

    /// Replaces the track, for example after a resize.
    pub fn set_track(&mut self, track: ScrubberTrack) {
        self.track = track;
    }

    /// Click-to-seek without starting a drag.
    #[must_use]
    pub fn seek(&self, x: f64) -> f64 {
        self.track.position_at(x)
    }

    /// Pointer down on the track: seeks and starts a drag.
    pub fn press(&mut self, x: f64) -> f64 {
        self.drag.begin(Point::new(x, 0.0));
        self.track.position_at(x)
    }

    /// Global pointer move. Returns the new `t` while dragging.
    pub fn drag_to(&mut self, x: f64) -> Option<f64> {
        self.drag.update(Point::new(x, 0.0))?;
        Some(self.track.position_at(x))
    }

    /// Pointer up. Returns `true` if a drag ended.
    pub fn release(&mut self) -> bool {
        self.drag.end()
    }

    /// Returns `true` while the thumb is held.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Thumb bounds for `t`, vertically centered on `center_y`.
    #[must_use]
    pub fn thumb_rect(&self, t: f64, center_y: f64, theme: &InteractionTheme) -> Rect {
        let x = self.track.x_at(t);
        let r = theme.thumb_radius;
        Rect::new(x - r, center_y - r, x + r, center_y + r)
    }

    /// Filled part of the track for `t`.
    #[must_use]
    pub fn progress_rect(&self, t: f64, center_y: f64, theme: &InteractionTheme) -> Rect {
        let half = theme.track_height * 0.5;
        Rect::new(
            self.track.start,
            center_y - half,
            self.track.x_at(t),
            center_y + half,
        )
    }
}

/// Advances `t` over time while playing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playback {
    /// Whether the clock is running.
    pub playing: bool,
    /// Change in `t` per second.
    pub speed: f64,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            playing: false,
            speed: 0.05,
        }
    }
}

impl Playback {
    /// Starts playing from `t`, rewinding to `0` if already at the end.
    pub fn play(&mut self, t: f64) -> f64 {
        self.playing = true;
        let t = clamp_unit(t);
        if t >= 1.0 { 0.0 } else { t }
    }

    /// Stops the clock.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Advances `t` by `dt` seconds; stops on reaching the end.
    pub fn advance(&mut self, t: f64, dt: f64) -> f64 {
        if !self.playing || dt <= 0.0 {
            return clamp_unit(t);
        }
        let next = clamp_unit(t + self.speed * dt);
        if next >= 1.0 {
            self.playing = false;
        }
        next
    }
}

fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}
