use crate::error::ExportError;
use crate::model::Allocation;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 9] = [
    "Ref ID",
    "Student Name",
    "Matric Number",
    "Hostel",
    "Room",
    "Bed Space",
    "Date Allocated",
    "Amount Paid",
    "Status",
];

/// Writes allocations to a CSV file at `path`. Returns the row count.
pub fn export_allocations_csv<'a, P, I>(allocations: I, path: P) -> Result<usize, ExportError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Allocation>,
{
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let count = write_allocations_csv(allocations, file)?;
    tracing::info!(path = %path_ref.display(), rows = count, "Exported allocations CSV");
    Ok(count)
}

/// Writes the header row and one row per allocation. Returns the row count.
///
/// Fields containing commas or quotes are quoted.
pub fn write_allocations_csv<'a, W, I>(allocations: I, out: W) -> Result<usize, ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a Allocation>,
{
    let mut writer = csv::Writer::from_writer(out);

    writer.write_record(HEADER)?;

    let mut count = 0;
    for allocation in allocations {
        writer.write_record([
            &allocation.reference(),
            &allocation.student_name,
            &allocation.student_matric,
            &allocation.hostel_name,
            &allocation.room_number,
            &allocation.bed_space,
            &allocation.date_allocated,
            &allocation.amount_paid.to_string(),
            &allocation.status.to_string(),
        ])?;
        count += 1;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(count)
}
