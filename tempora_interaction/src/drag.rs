// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking with guaranteed listener cleanup.
//!
//! Dragging a scrubber thumb or a minimap indicator must keep working when the
//! pointer leaves the element, so hosts listen for pointer move/up globally
//! for the duration of the drag. [`DragSession`] owns that lifetime: it calls
//! [`PointerCapture::attach`] when a drag begins and
//! [`PointerCapture::detach`] exactly once when it ends, including when the
//! session is dropped mid-drag.
//!
//! ## Usage
//!
//! 1) Call [`DragSession::begin`] on pointer down.
//! 2) Call [`DragSession::update`] on every global pointer move to get the delta
//!    since the previous position, or [`DragSession::total_offset`] for the
//!    offset from the press position.
//! 3) Call [`DragSession::end`] on pointer up.
//!
//! ```
//! use kurbo::Point;
//! use tempora_interaction::drag::{DragSession, PointerCapture};
//!
//! #[derive(Default)]
//! struct Listeners {
//!     attached: u32,
//!     detached: u32,
//! }
//!
//! impl PointerCapture for Listeners {
//!     fn attach(&mut self) {
//!         self.attached += 1;
//!     }
//!     fn detach(&mut self) {
//!         self.detached += 1;
//!     }
//! }
//!
//! let mut session = DragSession::new(Listeners::default());
//! session.begin(Point::new(10.0, 0.0));
//! let delta = session.update(Point::new(25.0, 0.0)).unwrap();
//! assert_eq!(delta.x, 15.0);
//!
//! assert!(session.end());
//! assert!(!session.end());
//! assert_eq!(session.capture().attached, 1);
//! assert_eq!(session.capture().detached, 1);
//! ```

use kurbo::{Point, Vec2};

/// Host hook for global pointer listeners.
pub trait PointerCapture {
    /// Start receiving pointer move/up events outside the dragged element.
    fn attach(&mut self);
    /// Stop receiving them.
    fn detach(&mut self);
}

/// A capture that does nothing, for hosts with implicit pointer capture.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    fn attach(&mut self) {}
    fn detach(&mut self) {}
}

/// Press and last-seen pointer positions of one drag.
///
/// Both are `None` while idle.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Where the pointer went down.
    pub start_pos: Option<Point>,
    /// Pointer position at the previous update.
    pub last_pos: Option<Point>,
}

impl DragState {
    /// Records a press at `pos`, replacing any drag in progress.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Moves to `pos` and returns the step from the previous position.
    ///
    /// Returns `None` while idle.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Offset of `current_pos` from the press position, or `None` while idle.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Forgets both positions.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` between a press and its release.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

/// A drag that owns its pointer capture for exactly the length of the drag.
#[derive(Debug)]
pub struct DragSession<C: PointerCapture> {
    capture: C,
    state: DragState,
}

impl<C: PointerCapture> DragSession<C> {
    /// Creates an idle session around a host capture.
    pub fn new(capture: C) -> Self {
        Self {
            capture,
            state: DragState::default(),
        }
    }

    /// Begins a drag at `pos`, attaching the capture.
    ///
    /// Beginning while already dragging restarts from `pos` without attaching
    /// a second time.
    pub fn begin(&mut self, pos: Point) {
        if !self.state.is_dragging() {
            self.capture.attach();
        }
        self.state.start(pos);
    }

    /// Records a pointer move, returning the delta since the previous one.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.state.update(pos)
    }

    /// Offset of `pos` from the press position, or `None` when idle.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.state.total_offset(pos)
    }

    /// Ends the drag and detaches the capture.
    ///
    /// Returns `true` if a drag was active; repeated calls are no-ops.
    pub fn end(&mut self) -> bool {
        if !self.state.is_dragging() {
            return false;
        }
        self.state.end();
        self.capture.detach();
        true
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// The host capture.
    pub fn capture(&self) -> &C {
        &self.capture
    }
}

impl<C: PointerCapture + Default> Default for DragSession<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: PointerCapture> Drop for DragSession<C> {
    fn drop(&mut self) {
        self.end();
    }
}
