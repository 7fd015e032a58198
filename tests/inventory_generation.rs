//! End-to-end checks of generated inventories.
//!
//! Exercises: templates → generator → admin edits → CSV export.

use hostel_inventory::export::{export_allocations_csv, write_allocations_csv};
use hostel_inventory::generator::{builtin_templates, generate_inventory, GenerateError};
use hostel_inventory::model::{
    AllocationFilter, AllocationStatus, Gender, HostelTemplate, Inventory, RoomStatus,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeMap, HashSet};

// ── Helpers ────────────────────────────────────────────────────────────

fn generate(seed: u64) -> Inventory {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_inventory(&builtin_templates(), &mut rng).expect("built-in templates are valid")
}

const SEEDS: [u64; 6] = [0, 1, 7, 42, 1337, 2025];

// ── Structural properties ──────────────────────────────────────────────

#[test]
fn room_count_is_independent_of_draws() {
    let expected: usize = builtin_templates()
        .iter()
        .map(|t| 5 * t.room_types.len())
        .sum();
    assert_eq!(expected, 115);

    for seed in SEEDS {
        assert_eq!(generate(seed).rooms.len(), expected, "seed {seed}");
    }
}

#[test]
fn every_room_references_an_existing_hostel() {
    for seed in SEEDS {
        let inventory = generate(seed);
        for room in &inventory.rooms {
            assert!(inventory.hostel(&room.hostel_id).is_some(), "{}", room.id);
        }
    }
}

#[test]
fn room_ids_are_unique() {
    let inventory = generate(7);
    let ids: HashSet<&str> = inventory.rooms.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), inventory.rooms.len());
}

#[test]
fn room_status_follows_occupancy() {
    for seed in SEEDS {
        for room in &generate(seed).rooms {
            assert!(room.occupants.len() <= room.capacity as usize);
            let full = room.occupants.len() >= room.capacity as usize;
            assert_eq!(room.status == RoomStatus::Full, full, "{}", room.id);
            assert_ne!(room.status, RoomStatus::Maintenance);
        }
    }
}

#[test]
fn hostel_aggregates_are_derived_from_rooms() {
    for seed in SEEDS {
        let inventory = generate(seed);
        for hostel in &inventory.hostels {
            let rooms = inventory.rooms_for(&hostel.id);
            let capacity: u32 = rooms.iter().map(|r| r.capacity).sum();
            let available: u32 = rooms
                .iter()
                .filter(|r| r.status == RoomStatus::Available)
                .map(|r| r.capacity - r.occupants.len() as u32)
                .sum();
            assert_eq!(hostel.capacity, capacity);
            assert_eq!(hostel.available_rooms, available);
        }
    }
}

#[test]
fn guest_house_never_has_occupants() {
    for seed in SEEDS {
        let inventory = generate(seed);
        let guest_house = inventory.hostel("guest-house").unwrap();
        assert_eq!(guest_house.available_rooms, guest_house.capacity);
        assert!(inventory.allocations.iter().all(|a| a.hostel_id != "guest-house"));
    }
}

// ── Allocation properties ──────────────────────────────────────────────

#[test]
fn allocations_cover_every_occupant_exactly_once() {
    for seed in SEEDS {
        let inventory = generate(seed);
        let occupants: usize = inventory.rooms.iter().map(|r| r.occupants.len()).sum();
        assert_eq!(inventory.allocations.len(), occupants);

        for allocation in &inventory.allocations {
            let matching: Vec<_> = inventory
                .rooms
                .iter()
                .filter(|r| r.id == allocation.room_id)
                .collect();
            assert_eq!(matching.len(), 1);

            let room = matching[0];
            assert!(room.occupants.contains(&allocation.student_id));
            assert_eq!(room.room_number, allocation.room_number);
            assert_eq!(room.hostel_id, allocation.hostel_id);

            let hostel = inventory.hostel(&room.hostel_id).unwrap();
            assert_eq!(hostel.name, allocation.hostel_name);
            let expected_price = hostel
                .price_list
                .get(&room.capacity)
                .copied()
                .unwrap_or(hostel.price);
            assert_eq!(allocation.amount_paid, expected_price);
            assert_eq!(allocation.status, AllocationStatus::Active);
            assert_eq!(allocation.date_allocated, "2025-10-15");
        }
    }
}

#[test]
fn allocation_ids_and_matric_numbers_are_unique() {
    let inventory = generate(42);
    let ids: HashSet<&str> = inventory.allocations.iter().map(|a| a.id.as_str()).collect();
    let matrics: HashSet<&str> = inventory
        .allocations
        .iter()
        .map(|a| a.student_matric.as_str())
        .collect();
    assert_eq!(ids.len(), inventory.allocations.len());
    assert_eq!(matrics.len(), inventory.allocations.len());
}

#[test]
fn missing_price_entry_falls_back_to_base_price() {
    let template = HostelTemplate {
        id: "annex".to_string(),
        name: "Annex".to_string(),
        image: String::new(),
        description: String::new(),
        gender: Gender::Mixed,
        price: 75_000,
        room_types: vec![3, 5],
        price_list: BTreeMap::from([(3, 90_000)]),
        always_vacant: false,
    };
    let mut rng = StdRng::seed_from_u64(3);
    let inventory = generate_inventory(&[template], &mut rng).unwrap();

    for allocation in &inventory.allocations {
        let room = inventory.room(&allocation.room_id).unwrap();
        let expected = if room.capacity == 3 { 90_000 } else { 75_000 };
        assert_eq!(allocation.amount_paid, expected);
    }
}

#[test]
fn same_seed_same_inventory() {
    let a = generate(1337);
    let b = generate(1337);
    assert_eq!(a.rooms, b.rooms);
    assert_eq!(a.allocations, b.allocations);
    assert_eq!(a.hostels, b.hostels);
}

#[test]
fn invalid_template_aborts_generation() {
    let mut templates = builtin_templates();
    templates[2].room_types.clear();
    let mut rng = StdRng::seed_from_u64(0);

    let err = generate_inventory(&templates, &mut rng).unwrap_err();
    assert!(matches!(err, GenerateError::InvalidTemplate { ref id, .. } if id == "purity"));
}

// ── Downstream edits ───────────────────────────────────────────────────

#[test]
fn edits_on_a_copy_leave_the_generated_inventory_alone() {
    let generated = generate(9);
    let mut working = generated.clone();

    let room_id = working.rooms_for("peace")[0].id.clone();
    working
        .update_room(&room_id, "401", 12, RoomStatus::Maintenance)
        .unwrap();

    assert_ne!(generated.room(&room_id).unwrap().status, RoomStatus::Maintenance);

    let peace = working.hostel("peace").unwrap();
    let rooms = working.rooms_for("peace");
    assert_eq!(peace.capacity, rooms.iter().map(|r| r.capacity).sum::<u32>());
    assert_eq!(
        peace.available_rooms,
        rooms.iter().map(|r| r.free_beds()).sum::<u32>()
    );
}

#[test]
fn filtered_allocations_export_with_header() {
    let mut inventory = generate(2025);
    let first = inventory.allocations[0].id.clone();
    inventory.revoke_allocation(&first).unwrap();

    let filter = AllocationFilter {
        status: Some(AllocationStatus::Expired),
        ..AllocationFilter::default()
    };
    let expired = inventory.filter_allocations(&filter);
    assert_eq!(expired.len(), 1);

    let mut out = Vec::new();
    let rows = write_allocations_csv(expired, &mut out).unwrap();
    assert_eq!(rows, 1);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Ref ID,Student Name,Matric Number"));
    assert!(lines[1].starts_with(&format!("{}-SEC,", first.to_uppercase())));
    assert!(lines[1].ends_with(",Expired"));
}

#[test]
fn csv_file_export_writes_only_filtered_rows() {
    let mut inventory = generate(42);
    let revoked: Vec<String> = inventory.allocations[..2]
        .iter()
        .map(|a| a.id.clone())
        .collect();
    for id in &revoked {
        inventory.revoke_allocation(id).unwrap();
    }
    let hostel_name = inventory.allocations[0].hostel_name.clone();
    assert!(inventory.hostel_names().contains(&hostel_name.as_str()));

    let filter = AllocationFilter {
        query: String::new(),
        status: Some("expired".parse().unwrap()),
        hostel_name: Some(hostel_name.clone()),
    };
    let expected = inventory.filter_allocations(&filter).len();
    assert!(expected >= 1);
    assert!(expected < inventory.allocations.len());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expired.csv");
    let rows = export_allocations_csv(inventory.filter_allocations(&filter), &path).unwrap();
    assert_eq!(rows, expected);

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), expected + 1);
    for line in &lines[1..] {
        assert!(line.contains(&hostel_name), "{line}");
        assert!(line.ends_with(",Expired"), "{line}");
    }
}

#[test]
fn repeated_room_type_is_rejected_before_generation() {
    let mut templates = builtin_templates();
    templates[0].room_types.push(4);
    let mut rng = StdRng::seed_from_u64(1);

    let err = generate_inventory(&templates, &mut rng).unwrap_err();
    assert!(matches!(err, GenerateError::InvalidTemplate { ref id, .. } if id == "peace"));
}
