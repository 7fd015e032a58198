use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Available,
    Full,
    /// Only set by manual room edits, never by generation.
    Maintenance,
}

impl RoomStatus {
    /// Status derived from occupancy at generation time.
    #[must_use]
    pub fn from_occupancy(occupants: usize, capacity: u32) -> Self {
        if occupants >= capacity as usize {
            RoomStatus::Full
        } else {
            RoomStatus::Available
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoomStatus::Available => "Available",
            RoomStatus::Full => "Full",
            RoomStatus::Maintenance => "Maintenance",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub hostel_id: String,
    pub room_number: String,
    pub capacity: u32,
    pub occupants: Vec<String>,
    pub status: RoomStatus,
}

impl Room {
    /// Largest bed-space count a single room may declare.
    pub const MAX_CAPACITY: u32 = 64;

    /// Room id: the hostel id joined to the lowercased room number, with
    /// whitespace runs replaced by `-`.
    #[must_use]
    pub fn id_for(hostel_id: &str, room_number: &str) -> String {
        let number = room_number
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();
        format!("{hostel_id}-{number}")
    }

    /// Unfilled bed-spaces counted towards the hostel's availability.
    ///
    /// Only rooms marked Available contribute; Full and Maintenance rooms count as zero.
    #[must_use]
    pub fn free_beds(&self) -> u32 {
        match self.status {
            RoomStatus::Available => self
                .capacity
                .saturating_sub(self.occupants.len() as u32),
            RoomStatus::Full | RoomStatus::Maintenance => 0,
        }
    }
}
