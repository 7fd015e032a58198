//! Error types for Hostel Inventory.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort inventory generation. There is no partial result.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A hostel template cannot produce rooms.
    #[error("invalid hostel template '{id}': {message}")]
    InvalidTemplate { id: String, message: String },

    /// A generated room points at a hostel that does not exist.
    #[error("room '{room_id}' references unknown hostel '{hostel_id}'")]
    UnknownHostel { room_id: String, hostel_id: String },

    /// More allocations than distinct matric numbers.
    #[error("cannot assign a unique matric number to {allocations} allocations")]
    MatricPoolExhausted { allocations: usize },
}

/// Errors that can occur when loading hostel templates.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Failed to read the template file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The template file is not a valid JSON template list.
    #[error("invalid template JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors returned by admin edits on an inventory.
#[derive(Debug, Error, PartialEq)]
pub enum InventoryError {
    #[error("hostel '{id}' not found")]
    HostelNotFound { id: String },

    #[error("room '{id}' not found")]
    RoomNotFound { id: String },

    #[error("room '{id}' already exists")]
    DuplicateRoom { id: String },

    #[error("allocation '{id}' not found")]
    AllocationNotFound { id: String },

    /// The requested capacity cannot hold the room's current occupants.
    #[error("room '{id}' cannot have capacity {capacity}: {occupants} occupants")]
    InvalidCapacity {
        id: String,
        capacity: u32,
        occupants: usize,
    },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
