use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationStatus {
    Active,
    Pending,
    Expired,
}

impl AllocationStatus {
    pub const ALL: [AllocationStatus; 3] = [
        AllocationStatus::Active,
        AllocationStatus::Pending,
        AllocationStatus::Expired,
    ];
}

impl fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AllocationStatus::Active => "Active",
            AllocationStatus::Pending => "Pending",
            AllocationStatus::Expired => "Expired",
        };
        f.write_str(label)
    }
}

impl FromStr for AllocationStatus {
    type Err = String;

    /// Parses a status label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown allocation status '{s}' (Active, Pending, Expired)"))
    }
}

/// One occupant bound to one bed-space.
///
/// Hostel name and room number are snapshots taken at generation time and
/// are not re-resolved when the hostel or room is edited later.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub student_matric: String,
    pub hostel_id: String,
    pub hostel_name: String,
    pub room_id: String,
    pub room_number: String,
    pub status: AllocationStatus,
    pub date_allocated: String,
    pub amount_paid: u64,
    pub bed_space: String,
}

impl Allocation {
    /// Reference printed on exports and allocation slips.
    #[must_use]
    pub fn reference(&self) -> String {
        format!("{}-SEC", self.id.to_uppercase())
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == AllocationStatus::Active
    }
}
