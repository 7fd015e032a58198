use super::{Allocation, AllocationStatus, Hostel, Room, RoomStatus};
use crate::error::InventoryError;
use serde::Serialize;

/// Hostels, rooms and allocations produced by one generator run.
///
/// The generator hands out an owned copy; edits made here never feed back
/// into generation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Inventory {
    pub hostels: Vec<Hostel>,
    pub rooms: Vec<Room>,
    pub allocations: Vec<Allocation>,
}

/// Search and filter criteria for the allocations table.
#[derive(Debug, Clone, Default)]
pub struct AllocationFilter {
    /// Case-insensitive substring of student name, matric number or allocation id.
    pub query: String,
    pub status: Option<AllocationStatus>,
    pub hostel_name: Option<String>,
}

impl AllocationFilter {
    #[must_use]
    pub fn matches(&self, allocation: &Allocation) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = query.is_empty()
            || allocation.student_name.to_lowercase().contains(&query)
            || allocation.student_matric.to_lowercase().contains(&query)
            || allocation.id.to_lowercase().contains(&query);

        let matches_status = self.status.is_none_or(|s| allocation.status == s);

        let matches_hostel = self
            .hostel_name
            .as_deref()
            .is_none_or(|name| allocation.hostel_name == name);

        matches_search && matches_status && matches_hostel
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostelOccupancy {
    pub id: String,
    pub name: String,
    pub occupied: u32,
    pub available: u32,
    pub capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryStats {
    pub total_hostels: usize,
    pub total_capacity: u32,
    pub active_allocations: usize,
    /// Active allocations per bed-space, in percent.
    pub occupancy_rate: f64,
    /// Sum paid by active allocations.
    pub revenue: u64,
    pub hostels: Vec<HostelOccupancy>,
}

impl Inventory {
    #[must_use]
    pub fn hostel(&self, id: &str) -> Option<&Hostel> {
        self.hostels.iter().find(|h| h.id == id)
    }

    #[must_use]
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn rooms_for(&self, hostel_id: &str) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|r| r.hostel_id == hostel_id)
            .collect()
    }

    #[must_use]
    pub fn allocations_for_room(&self, room_id: &str) -> Vec<&Allocation> {
        self.allocations
            .iter()
            .filter(|a| a.room_id == room_id)
            .collect()
    }

    #[must_use]
    pub fn allocations_for_hostel(&self, hostel_id: &str) -> Vec<&Allocation> {
        self.allocations
            .iter()
            .filter(|a| a.hostel_id == hostel_id)
            .collect()
    }

    /// The allocation slip of a student: their first active allocation.
    #[must_use]
    pub fn allocation_for_student(&self, student_id: &str) -> Option<&Allocation> {
        self.allocations
            .iter()
            .find(|a| a.student_id == student_id && a.is_active())
    }

    #[must_use]
    pub fn filter_allocations(&self, filter: &AllocationFilter) -> Vec<&Allocation> {
        self.allocations
            .iter()
            .filter(|a| filter.matches(a))
            .collect()
    }

    /// Distinct hostel names across allocations, in first-seen order.
    #[must_use]
    pub fn hostel_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for allocation in &self.allocations {
            if !names.contains(&allocation.hostel_name.as_str()) {
                names.push(&allocation.hostel_name);
            }
        }
        names
    }

    #[must_use]
    pub fn total_capacity(&self) -> u32 {
        self.hostels
            .iter()
            .fold(0, |total: u32, h| total.saturating_add(h.capacity))
    }

    #[must_use]
    pub fn stats(&self) -> InventoryStats {
        let total_capacity = self.total_capacity();
        let active: Vec<&Allocation> = self
            .allocations
            .iter()
            .filter(|a| a.is_active())
            .collect();

        let occupancy_rate = if total_capacity > 0 {
            active.len() as f64 / f64::from(total_capacity) * 100.0
        } else {
            0.0
        };

        InventoryStats {
            total_hostels: self.hostels.len(),
            total_capacity,
            active_allocations: active.len(),
            occupancy_rate,
            revenue: active.iter().map(|a| a.amount_paid).sum(),
            hostels: self
                .hostels
                .iter()
                .map(|h| HostelOccupancy {
                    id: h.id.clone(),
                    name: h.name.clone(),
                    occupied: h.occupied(),
                    available: h.available_rooms,
                    capacity: h.capacity,
                })
                .collect(),
        }
    }

    /// Removes a hostel and its rooms. Allocations stay as historical records.
    pub fn remove_hostel(&mut self, id: &str) -> Result<Hostel, InventoryError> {
        let index = self
            .hostels
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| InventoryError::HostelNotFound { id: id.to_string() })?;
        let hostel = self.hostels.remove(index);
        self.rooms.retain(|r| r.hostel_id != id);
        tracing::info!(hostel = %id, "Removed hostel");
        Ok(hostel)
    }

    pub fn add_room(
        &mut self,
        hostel_id: &str,
        room_number: &str,
        capacity: u32,
        status: RoomStatus,
    ) -> Result<&Room, InventoryError> {
        if self.hostel(hostel_id).is_none() {
            return Err(InventoryError::HostelNotFound {
                id: hostel_id.to_string(),
            });
        }
        let id = Room::id_for(hostel_id, room_number);
        if self.room(&id).is_some() {
            return Err(InventoryError::DuplicateRoom { id });
        }
        if capacity == 0 || capacity > Room::MAX_CAPACITY {
            return Err(InventoryError::InvalidCapacity {
                id,
                capacity,
                occupants: 0,
            });
        }

        self.rooms.push(Room {
            id: id.clone(),
            hostel_id: hostel_id.to_string(),
            room_number: room_number.to_string(),
            capacity,
            occupants: Vec::new(),
            status,
        });
        self.refresh_totals(hostel_id);
        tracing::info!(room = %id, capacity, "Added room");

        let index = self.rooms.len() - 1;
        Ok(&self.rooms[index])
    }

    /// Edits a room in place. Its id stays stable even when the number changes.
    pub fn update_room(
        &mut self,
        room_id: &str,
        room_number: &str,
        capacity: u32,
        status: RoomStatus,
    ) -> Result<(), InventoryError> {
        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.id == room_id)
            .ok_or_else(|| InventoryError::RoomNotFound {
                id: room_id.to_string(),
            })?;

        if capacity == 0
            || capacity > Room::MAX_CAPACITY
            || (capacity as usize) < room.occupants.len()
        {
            return Err(InventoryError::InvalidCapacity {
                id: room_id.to_string(),
                capacity,
                occupants: room.occupants.len(),
            });
        }

        room.room_number = room_number.to_string();
        room.capacity = capacity;
        room.status = status;
        let hostel_id = room.hostel_id.clone();

        self.refresh_totals(&hostel_id);
        tracing::info!(room = %room_id, %status, "Updated room");
        Ok(())
    }

    pub fn remove_room(&mut self, room_id: &str) -> Result<Room, InventoryError> {
        let index = self
            .rooms
            .iter()
            .position(|r| r.id == room_id)
            .ok_or_else(|| InventoryError::RoomNotFound {
                id: room_id.to_string(),
            })?;
        let room = self.rooms.remove(index);
        self.refresh_totals(&room.hostel_id);
        tracing::info!(room = %room_id, "Removed room");
        Ok(room)
    }

    /// Marks an allocation as expired. Room occupants are left untouched.
    pub fn revoke_allocation(&mut self, id: &str) -> Result<&Allocation, InventoryError> {
        let index = self
            .allocations
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| InventoryError::AllocationNotFound { id: id.to_string() })?;

        let allocation = &mut self.allocations[index];
        if allocation.status != AllocationStatus::Expired {
            allocation.status = AllocationStatus::Expired;
            tracing::info!(
                allocation = %id,
                student = %allocation.student_name,
                "Revoked allocation"
            );
        }
        Ok(&self.allocations[index])
    }

    /// Recomputes a hostel's capacity and availability from its rooms.
    fn refresh_totals(&mut self, hostel_id: &str) {
        let (capacity, available) = self
            .rooms
            .iter()
            .filter(|r| r.hostel_id == hostel_id)
            .fold((0u32, 0u32), |(cap, avail), r| {
                (
                    cap.saturating_add(r.capacity),
                    avail.saturating_add(r.free_beds()),
                )
            });

        if let Some(hostel) = self.hostels.iter_mut().find(|h| h.id == hostel_id) {
            hostel.capacity = capacity;
            hostel.available_rooms = available;
        }
    }
}
