// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tempora Interaction: headless interaction primitives shared by every view.
//!
//! Each primitive turns pointer input into a new value for state the caller
//! owns. None of them store the value they display: a view keeps its scrubber
//! position, zoom level or scroll offset, passes it in, and stores whatever
//! comes back.
//!
//! - [`drag`]: a drag session that attaches a global pointer capture on press
//!   and detaches it exactly once, on release or on drop.
//! - [`scrubber`]: normalized `t ∈ [0, 1]` seeking and dragging along a track,
//!   plus a [`Playback`] clock.
//! - [`zoom`]: multiplicative zoom stepping clamped to configured limits.
//! - [`minimap`]: markers and a draggable viewport indicator over a scaled
//!   overview of the full content width.
//! - [`theme`]: sizes and colors used to compute visual extents.
//!
//! Out-of-range input is clamped everywhere; nothing here returns an error.
//!
//! ## Minimal example
//!
//! ```rust
//! use tempora_interaction::{Minimap, ZoomConfig};
//!
//! // Zoom: 2x steps between 0.5 and 8.
//! let zoom = ZoomConfig { min: 0.5, max: 8.0, step: 2.0, default: 1.0 };
//! assert_eq!(zoom.zoom_in(4.0), 8.0);
//! assert_eq!(zoom.zoom_in(8.0), 8.0);
//!
//! // Minimap: 4000px of content, 1000px viewport, 200px track.
//! let minimap = Minimap::new(4000.0, 1000.0, 200.0);
//! // Clicking the middle of the track centers the viewport on the middle of the content.
//! assert_eq!(minimap.navigate_to(100.0), 1500.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod minimap;
pub mod scrubber;
pub mod theme;
pub mod zoom;

pub use drag::{DragSession, DragState, NoCapture, PointerCapture};
pub use minimap::{Minimap, MinimapDrag};
pub use scrubber::{Playback, Scrubber, ScrubberTrack};
pub use theme::InteractionTheme;
pub use zoom::{ZoomConfig, ZoomState};
