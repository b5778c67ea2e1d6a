// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::{Timeline, TimelineEvent};

/// A loaded timeline plus the currently selected event.
///
/// Two revision counters let observers detect changes without comparing
/// contents:
/// - [`data_revision`](Self::data_revision) bumps when the timeline is replaced.
/// - [`selection_revision`](Self::selection_revision) bumps when the selected
///   id actually changes. No-op calls leave it unchanged.
#[derive(Clone, Debug, Default)]
pub struct TimelineStore {
    timeline: Timeline,
    selected: Option<String>,
    data_revision: u64,
    selection_revision: u64,
}

impl TimelineStore {
    /// Wraps a loaded timeline with nothing selected.
    #[must_use]
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            selected: None,
            data_revision: 0,
            selection_revision: 0,
        }
    }

    /// The current timeline.
    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Replaces the timeline.
    ///
    /// The selection survives only if the selected id still exists.
    pub fn replace_timeline(&mut self, timeline: Timeline) {
        self.timeline = timeline;
        self.data_revision = self.data_revision.wrapping_add(1);
        if let Some(id) = &self.selected
            && self.timeline.event(id).is_none()
        {
            self.selected = None;
            self.bump_selection();
        }
    }

    /// Id of the selected event, if any.
    #[must_use]
    pub fn selected_event_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected event, if any.
    #[must_use]
    pub fn selected_event(&self) -> Option<&TimelineEvent> {
        self.selected
            .as_deref()
            .and_then(|id| self.timeline.event(id))
    }

    /// Selects an event by id, or clears the selection with `None`.
    ///
    /// Ids that do not name an event are ignored. Returns `true` if the
    /// selection changed.
    pub fn select_event(&mut self, id: Option<&str>) -> bool {
        match id {
            None => {
                if self.selected.is_none() {
                    return false;
                }
                self.selected = None;
            }
            Some(id) => {
                if self.selected.as_deref() == Some(id) || self.timeline.event(id).is_none() {
                    return false;
                }
                self.selected = Some(String::from(id));
            }
        }
        self.bump_selection();
        true
    }

    /// Monotonic counter bumped when the timeline is replaced.
    #[must_use]
    pub fn data_revision(&self) -> u64 {
        self.data_revision
    }

    /// Monotonic counter bumped when the selection changes.
    #[must_use]
    pub fn selection_revision(&self) -> u64 {
        self.selection_revision
    }

    fn bump_selection(&mut self) {
        self.selection_revision = self.selection_revision.wrapping_add(1);
    }
}
