use chrono::{DateTime, Local, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub label: String,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(label: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            label,
            created_at: Utc::now(),
        }
    }

    /// Tooltip text for the card, e.g. "Added at 14:02:11".
    pub fn added_at(&self) -> String {
        format!(
            "Added at {}",
            self.created_at.with_timezone(&Local).format("%H:%M:%S")
        )
    }
}
