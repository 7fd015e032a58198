use super::ROOMS_PER_TYPE;
use crate::model::{Hostel, Room, RoomStatus};
use rand::Rng;

/// Generates the rooms of one hostel and writes its occupancy aggregates.
///
/// Room types are walked in declaration order. The hostel's `capacity` and
/// `available_rooms` are overwritten with the totals of the new rooms.
pub fn generate_rooms(hostel: &mut Hostel, rng: &mut impl Rng) -> Vec<Room> {
    let mut rooms = Vec::with_capacity(hostel.room_types.len() * ROOMS_PER_TYPE as usize);
    let mut hostel_capacity: u32 = 0;
    let mut hostel_available: u32 = 0;

    let prefix = occupant_prefix(&hostel.id);

    for &capacity in &hostel.room_types {
        for i in 1..=ROOMS_PER_TYPE {
            let room_number = format!("{capacity}0{i}");

            let occupant_count = if hostel.always_vacant {
                0
            } else {
                rng.gen_range(0..=capacity)
            };
            let status = RoomStatus::from_occupancy(occupant_count as usize, capacity);

            let occupants = (0..occupant_count)
                .map(|idx| format!("ST-{prefix}-{room_number}-{idx}"))
                .collect();

            hostel_capacity = hostel_capacity.saturating_add(capacity);
            if status == RoomStatus::Available {
                hostel_available = hostel_available.saturating_add(capacity - occupant_count);
            }

            rooms.push(Room {
                id: Room::id_for(&hostel.id, &room_number),
                hostel_id: hostel.id.clone(),
                room_number,
                capacity,
                occupants,
                status,
            });
        }
    }

    hostel.capacity = hostel_capacity;
    hostel.available_rooms = hostel_available;

    rooms
}

/// First two characters of the hostel id, uppercased.
fn occupant_prefix(hostel_id: &str) -> String {
    hostel_id.chars().take(2).collect::<String>().to_uppercase()
}
