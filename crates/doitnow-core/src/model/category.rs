use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY_ICON: &str = "folder-outline";
pub const DEFAULT_CATEGORY_COLOR: &str = "#FF6B00";

/// Icons offered by the category picker
pub const CATEGORY_ICONS: [&str; 8] = [
    "briefcase-outline",
    "home-outline",
    "fitness-outline",
    "heart-outline",
    "cart-outline",
    "book-outline",
    "trophy-outline",
    "people-outline",
];

/// Colors offered by the category picker
pub const CATEGORY_COLORS: [&str; 8] = [
    "#FF6B00", "#34C759", "#007AFF", "#FF3B30", "#5856D6", "#FF9500", "#AF52DE", "#FF2D55",
];

/// Category - a named, colored grouping of tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// `#RRGGBB`
    pub color: String,
    pub order_index: i64,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(
        id: String,
        name: String,
        icon: String,
        color: String,
        order_index: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            icon,
            color,
            order_index,
            created_at: now,
        }
    }

    pub fn apply_patch(&mut self, patch: &CategoryPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(icon) = &patch.icon {
            self.icon = icon.clone();
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
        if let Some(order_index) = patch.order_index {
            self.order_index = order_index;
        }
    }
}

/// Partial update for a category (`id` and `created_at` are fixed)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub order_index: Option<i64>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.icon.is_none()
            && self.color.is_none()
            && self.order_index.is_none()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn order_index(mut self, order_index: i64) -> Self {
        self.order_index = Some(order_index);
        self
    }
}
