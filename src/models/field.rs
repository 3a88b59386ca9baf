//! Fields and bookable field slots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time::TimeWindow;

/// A playing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Unique field identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Physical properties affecting placement.
    #[serde(default)]
    pub properties: FieldProperties,
}

/// Placement-relevant field properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldProperties {
    /// How many games may occupy the field concurrently.
    #[serde(default = "default_max_parallel")]
    pub max_parallel_games: u32,
    /// Whether the field is lit for evening play.
    #[serde(default)]
    pub has_lights: bool,
}

fn default_max_parallel() -> u32 {
    1
}

impl Default for FieldProperties {
    fn default() -> Self {
        Self {
            max_parallel_games: 1,
            has_lights: false,
        }
    }
}

impl Field {
    /// Creates a new field with default properties.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            properties: FieldProperties::default(),
        }
    }

    /// Sets the field name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the parallel-game capacity.
    pub fn with_max_parallel_games(mut self, max: u32) -> Self {
        self.properties.max_parallel_games = max;
        self
    }

    /// Sets whether the field is lit for evening play.
    pub fn with_lights(mut self, has_lights: bool) -> Self {
        self.properties.has_lights = has_lights;
        self
    }
}

/// A bookable time window on a field, the atomic placement resource.
///
/// A slot may be longer than a game; the engine carves a game-length
/// sub-window out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSlot {
    /// Unique slot identifier.
    pub id: String,
    /// Field this slot books.
    pub field_id: String,
    /// Slot start (inclusive).
    pub start_time: DateTime<Utc>,
    /// Slot end (exclusive).
    pub end_time: DateTime<Utc>,
}

impl FieldSlot {
    /// Creates a new field slot.
    pub fn new(
        id: impl Into<String>,
        field_id: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            field_id: field_id.into(),
            start_time,
            end_time,
        }
    }

    /// The slot as a time window.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }
}
