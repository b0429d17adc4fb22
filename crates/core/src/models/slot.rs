use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One bookable unit: a staff member at a date and time label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotKey {
    pub staff_id: Uuid,
    pub date: String,
    pub time: String,
}

impl SlotKey {
    pub fn new(staff_id: Uuid, date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            staff_id,
            date: date.into(),
            time: time.into(),
        }
    }
}

/// An administrator-created record marking a slot as unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedSlot {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub date: String,
    pub time: String,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl BlockedSlot {
    pub fn key(&self) -> SlotKey {
        SlotKey::new(self.staff_id, self.date.clone(), self.time.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBlockedSlot {
    pub slot: SlotKey,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Optional filters for listing blocked slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedSlotFilter {
    pub date: Option<String>,
    pub staff_id: Option<Uuid>,
}

impl BlockedSlotFilter {
    pub fn matches(&self, slot: &BlockedSlot) -> bool {
        self.date.as_ref().is_none_or(|date| *date == slot.date)
            && self.staff_id.is_none_or(|staff_id| staff_id == slot.staff_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlockedSlotRequest {
    pub staff_id: Option<Uuid>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlockedSlotResponse {
    pub success: bool,
    pub message: String,
    pub slot_id: Uuid,
    pub data: BlockedSlot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBlockedSlotsResponse {
    pub success: bool,
    pub data: Vec<BlockedSlot>,
    pub count: usize,
}
