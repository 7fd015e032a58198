//! # Hostel Inventory
//!
//! Synthetic hostel accommodation inventory for a university: halls, rooms
//! and student allocations, browsable in the terminal.
//!
//! ## Features
//!
//! - Generate rooms and allocations from hostel templates
//! - Seedable generation for reproducible inventories
//! - Room edits, hostel removal and allocation revocation
//! - Export filtered allocations to CSV and the whole inventory to JSON
//!
//! ## Example
//!
//! ```
//! use hostel_inventory::generator::{builtin_templates, generate_inventory};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let inventory = generate_inventory(&builtin_templates(), &mut rng).expect("valid templates");
//! println!("Hostels: {}", inventory.hostels.len());
//! println!("Allocations: {}", inventory.allocations.len());
//! ```

pub mod error;
pub mod export;
pub mod generator;
pub mod model;
pub mod ui;
