pub mod csv;
pub mod json;

pub use crate::error::ExportError;
pub use csv::{export_allocations_csv, write_allocations_csv};
pub use json::export_inventory_json;
