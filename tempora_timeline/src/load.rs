// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use hashbrown::HashSet;
use log::{debug, warn};

use crate::Timeline;

/// Reasons a timeline cannot be loaded.
///
/// Unreadable dates are not errors: they parse to a fallback date and are
/// reported with `log::warn!`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TimelineError {
    /// The input is not a timeline document.
    #[error("invalid timeline JSON: {0}")]
    Json(serde_json::Error),
    /// Two events share an id.
    #[error("duplicate event id `{0}`")]
    DuplicateEventId(String),
    /// Two groups share an id.
    #[error("duplicate group id `{0}`")]
    DuplicateGroupId(String),
}

impl From<serde_json::Error> for TimelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl Timeline {
    /// Parses a timeline document and checks it with [`Timeline::validate`].
    pub fn from_json(text: &str) -> Result<Self, TimelineError> {
        let timeline: Self = serde_json::from_str(text)?;
        timeline.validate()?;
        Ok(timeline)
    }

    /// Checks id uniqueness and logs data-quality warnings.
    ///
    /// Event and group ids must be unique. Events whose dates fall back to
    /// year 0, or whose primary group does not exist, are kept and logged.
    pub fn validate(&self) -> Result<(), TimelineError> {
        let mut group_ids = HashSet::with_capacity(self.groups.len());
        for group in &self.groups {
            if !group_ids.insert(group.id.as_str()) {
                return Err(TimelineError::DuplicateGroupId(group.id.clone()));
            }
        }

        let mut event_ids = HashSet::with_capacity(self.events.len());
        let mut fallbacks = 0_usize;
        for event in &self.events {
            if !event_ids.insert(event.id.as_str()) {
                return Err(TimelineError::DuplicateEventId(event.id.clone()));
            }
            if event.start().is_fallback() {
                fallbacks += 1;
                warn!(
                    "event `{}`: unreadable start date {:?}, placing it at year 0",
                    event.id, event.date_start
                );
            }
            if let Some(end) = &event.date_end
                && event.end().is_fallback()
            {
                warn!("event `{}`: unreadable end date {end:?}", event.id);
            }
            if let Some(group) = event.primary_group_id()
                && !group_ids.contains(group)
            {
                warn!(
                    "event `{}`: unknown primary group `{group}`, placing it on the trunk",
                    event.id
                );
            }
        }

        debug!(
            "loaded timeline {}: {} events, {} groups, {} fallback dates",
            self.title
                .as_deref()
                .or(self.id.as_deref())
                .unwrap_or("<untitled>"),
            self.events.len(),
            self.groups.len(),
            fallbacks,
        );
        Ok(())
    }
}
