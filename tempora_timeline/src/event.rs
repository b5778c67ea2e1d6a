// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use tempora_date::{ParsedDate, parse_date};

/// One dated entry on a timeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Unique id within the timeline.
    pub id: String,
    /// Short title.
    #[serde(default)]
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// Category tag, serialized as `type`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Start date string (`YYYY`, `-YYYY`, `YYYY-MM-DD`, ...).
    #[serde(alias = "dateStart")]
    pub date_start: String,
    /// Optional end date string.
    #[serde(default, alias = "dateEnd", skip_serializing_if = "Option::is_none")]
    pub date_end: Option<String>,
    /// Group membership; the first entry is the primary group.
    #[serde(default, alias = "groupIds", skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    /// Image references, passed through to presentation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Free-form date text shown instead of the parsed date.
    #[serde(default, alias = "displayDate", skip_serializing_if = "Option::is_none")]
    pub display_date: Option<String>,
}

impl TimelineEvent {
    /// Creates an event with the given id, category and start date.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<String>, date_start: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            date_start: date_start.into(),
            ..Self::default()
        }
    }

    /// Sets the end date.
    #[must_use]
    pub fn with_end(mut self, date_end: impl Into<String>) -> Self {
        self.date_end = Some(date_end.into());
        self
    }

    /// Appends a group membership.
    #[must_use]
    pub fn in_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_ids.push(group_id.into());
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The primary group id, if the event belongs to any group.
    #[must_use]
    pub fn primary_group_id(&self) -> Option<&str> {
        self.group_ids.first().map(String::as_str)
    }

    /// Parsed start date.
    #[must_use]
    pub fn start(&self) -> ParsedDate {
        parse_date(&self.date_start)
    }

    /// Parsed end date, or the start date when there is no end.
    #[must_use]
    pub fn end(&self) -> ParsedDate {
        match &self.date_end {
            Some(end) => parse_date(end),
            None => self.start(),
        }
    }
}

/// A named cluster of events, rendered as a branch or category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineGroup {
    /// Unique id within the timeline.
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Optional CSS color; the tree view uses it for the group's branch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TimelineGroup {
    /// Creates a group.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: None,
        }
    }
}

/// A complete dataset: events plus groups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Optional dataset id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Optional dataset title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Events in their stored order.
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
    /// Groups in their stored order.
    #[serde(default)]
    pub groups: Vec<TimelineGroup>,
}

impl Timeline {
    /// Creates a timeline from events and groups.
    #[must_use]
    pub fn new(events: Vec<TimelineEvent>, groups: Vec<TimelineGroup>) -> Self {
        Self {
            id: None,
            title: None,
            events,
            groups,
        }
    }

    /// Returns `true` if there are no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Looks up an event by id.
    #[must_use]
    pub fn event(&self, id: &str) -> Option<&TimelineEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Looks up a group by id.
    #[must_use]
    pub fn group(&self, id: &str) -> Option<&TimelineGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Position of a group in [`Timeline::groups`].
    #[must_use]
    pub fn group_index(&self, id: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.id == id)
    }
}
