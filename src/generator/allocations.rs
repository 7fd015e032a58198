use crate::error::GenerateError;
use crate::model::{Allocation, AllocationStatus, Hostel, Room};
use rand::Rng;
use std::collections::HashSet;

pub const ALLOCATION_DATE: &str = "2025-10-15";

const MATRIC_PREFIX: &str = "AUL/SCI/24/";
const MATRIC_MIN: u32 = 1000;
const MATRIC_MAX: u32 = 9998;

/// Derives one active allocation per room occupant.
///
/// Rooms are walked in order; empty rooms produce nothing. Every room must
/// resolve to a hostel in `hostels`.
pub fn derive_allocations(
    hostels: &[Hostel],
    rooms: &[Room],
    rng: &mut impl Rng,
) -> Result<Vec<Allocation>, GenerateError> {
    let mut allocations = Vec::new();
    let mut matrics = MatricPool::default();

    for room in rooms.iter().filter(|r| !r.occupants.is_empty()) {
        let hostel = hostels
            .iter()
            .find(|h| h.id == room.hostel_id)
            .ok_or_else(|| GenerateError::UnknownHostel {
                room_id: room.id.clone(),
                hostel_id: room.hostel_id.clone(),
            })?;

        for (index, student_id) in room.occupants.iter().enumerate() {
            let sequence = allocations.len() + 1;
            let student_matric =
                matrics
                    .draw(rng)
                    .ok_or(GenerateError::MatricPoolExhausted {
                        allocations: sequence,
                    })?;

            allocations.push(Allocation {
                id: format!("AL-{sequence:04}"),
                student_id: student_id.clone(),
                student_name: format!("Student {}", student_suffix(student_id, index)),
                student_matric,
                hostel_id: hostel.id.clone(),
                hostel_name: hostel.name.clone(),
                room_id: room.id.clone(),
                room_number: room.room_number.clone(),
                status: AllocationStatus::Active,
                date_allocated: ALLOCATION_DATE.to_string(),
                amount_paid: hostel.price_for(room.capacity),
                bed_space: format!("Bed {}", index + 1),
            });
        }
    }

    Ok(allocations)
}

/// Fourth `-` segment of an occupant id, or the bed index when it is missing or empty.
fn student_suffix(student_id: &str, index: usize) -> String {
    match student_id.split('-').nth(3) {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => index.to_string(),
    }
}

/// Hands out distinct matric numbers.
///
/// A random number is drawn and, when already taken, the next free number
/// above it is used instead, wrapping around the range.
#[derive(Debug, Default)]
struct MatricPool {
    taken: HashSet<u32>,
}

impl MatricPool {
    const SIZE: usize = (MATRIC_MAX - MATRIC_MIN + 1) as usize;

    fn draw(&mut self, rng: &mut impl Rng) -> Option<String> {
        if self.taken.len() >= Self::SIZE {
            return None;
        }

        let mut number = rng.gen_range(MATRIC_MIN..=MATRIC_MAX);
        while !self.taken.insert(number) {
            number = if number == MATRIC_MAX {
                MATRIC_MIN
            } else {
                number + 1
            };
        }

        Some(format!("{MATRIC_PREFIX}{number}"))
    }
}
