pub mod allocations;
pub mod rooms;
pub mod templates;

pub use crate::error::{GenerateError, TemplateError};
pub use templates::{builtin_templates, load_templates};

use crate::model::{Hostel, HostelTemplate, Inventory, Room};
use rand::Rng;
use std::collections::HashSet;

/// Rooms generated for every declared bed-capacity of a hostel.
pub const ROOMS_PER_TYPE: u32 = 5;

/// Builds hostels, rooms and allocations from hostel templates.
///
/// For each template, in order:
/// - five rooms per declared capacity, numbered `{capacity}0{i}`
/// - a uniform occupant count in `[0, capacity]`, or zero for
///   `always_vacant` templates
/// - `capacity` and `available_rooms` aggregates on the hostel
///
/// Allocations are derived afterwards, one per occupant.
///
/// # Arguments
///
/// * `templates` - Hostel templates, in display order
/// * `rng` - Source for occupancy and matric number draws
///
/// # Errors
///
/// Returns [`GenerateError::InvalidTemplate`] for a template with a
/// duplicate id, without room types, with a repeated room type, or with a
/// room type outside `1..=Room::MAX_CAPACITY`.
/// Returns [`GenerateError::UnknownHostel`] if a room cannot be resolved
/// to its hostel.
///
/// # Example
///
/// ```
/// use hostel_inventory::generator::{builtin_templates, generate_inventory};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let inventory = generate_inventory(&builtin_templates(), &mut rng)?;
/// assert_eq!(inventory.rooms.len(), 115);
/// # Ok::<(), hostel_inventory::error::GenerateError>(())
/// ```
pub fn generate_inventory(
    templates: &[HostelTemplate],
    rng: &mut impl Rng,
) -> Result<Inventory, GenerateError> {
    validate_templates(templates)?;

    let mut hostels: Vec<Hostel> = templates
        .iter()
        .cloned()
        .map(Hostel::from_template)
        .collect();

    let mut rooms = Vec::new();
    for hostel in &mut hostels {
        let hostel_rooms = rooms::generate_rooms(hostel, rng);
        tracing::debug!(
            hostel = %hostel.id,
            rooms = hostel_rooms.len(),
            capacity = hostel.capacity,
            available = hostel.available_rooms,
            "Generated rooms"
        );
        rooms.extend(hostel_rooms);
    }

    let allocations = allocations::derive_allocations(&hostels, &rooms, rng)?;

    tracing::info!(
        hostels = hostels.len(),
        rooms = rooms.len(),
        allocations = allocations.len(),
        "Generated inventory"
    );

    Ok(Inventory {
        hostels,
        rooms,
        allocations,
    })
}

fn validate_templates(templates: &[HostelTemplate]) -> Result<(), GenerateError> {
    let mut seen = HashSet::new();

    for template in templates {
        let invalid = |message: &str| GenerateError::InvalidTemplate {
            id: template.id.clone(),
            message: message.to_string(),
        };

        if !seen.insert(template.id.as_str()) {
            return Err(invalid("duplicate hostel id"));
        }
        if template.room_types.is_empty() {
            return Err(invalid("no room types declared"));
        }

        let mut capacities = HashSet::new();
        let mut total: u32 = 0;
        for &capacity in &template.room_types {
            if capacity == 0 {
                return Err(invalid("room type with zero beds"));
            }
            if capacity > Room::MAX_CAPACITY {
                return Err(invalid(&format!(
                    "room type with {capacity} beds exceeds {}",
                    Room::MAX_CAPACITY
                )));
            }
            if !capacities.insert(capacity) {
                return Err(invalid(&format!("duplicate room type {capacity}")));
            }
            total = capacity
                .checked_mul(ROOMS_PER_TYPE)
                .and_then(|beds| total.checked_add(beds))
                .ok_or_else(|| invalid("total bed-spaces overflow"))?;
        }
    }

    Ok(())
}
