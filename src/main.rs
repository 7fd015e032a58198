use clap::Parser;
use color_eyre::eyre::bail;
use color_eyre::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use hostel_inventory::export::{export_allocations_csv, export_inventory_json};
use hostel_inventory::generator::{builtin_templates, generate_inventory, load_templates};
use hostel_inventory::model::{AllocationFilter, AllocationStatus, Inventory};
use hostel_inventory::ui::App;

#[derive(Parser, Debug)]
#[command(name = "hostel-inventory")]
#[command(about = "Hostel Inventory - generate and browse halls, rooms and allocations")]
#[command(version)]
struct Args {
    /// JSON file with hostel templates (defaults to the built-in halls)
    #[arg(long, value_name = "FILE")]
    templates: Option<PathBuf>,

    /// Seed for occupancy draws; random when omitted
    #[arg(long, env = "HOSTEL_SEED")]
    seed: Option<u64>,

    /// Export allocations to CSV (optional output path)
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Only export allocations whose student name, matric number or id contains QUERY
    #[arg(long, value_name = "QUERY", requires = "csv")]
    search: Option<String>,

    /// Only export allocations with this status (Active, Pending, Expired)
    #[arg(long, requires = "csv")]
    status: Option<AllocationStatus>,

    /// Only export allocations in the hostel with this name
    #[arg(long, value_name = "NAME", requires = "csv")]
    hostel: Option<String>,

    /// Print the allocation slip of a student id (e.g. ST-PE-401-0)
    #[arg(long, value_name = "ID")]
    student: Option<String>,

    /// Export the inventory to JSON (optional output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let templates = match &args.templates {
        Some(path) => load_templates(path)?,
        None => builtin_templates(),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let inventory = generate_inventory(&templates, &mut rng)?;

    if let Some(student_id) = &args.student {
        print_slip(&inventory, student_id)?;
    }

    if let Some(csv_path) = &args.csv {
        let filter = allocation_filter(&args, &inventory);
        let rows = export_allocations_csv(inventory.filter_allocations(&filter), csv_path)?;
        println!("Exported {rows} allocations to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_inventory_json(&inventory, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if args.csv.is_some() || args.json.is_some() || args.student.is_some() {
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(inventory).run(terminal);
    ratatui::restore();
    result
}

fn allocation_filter(args: &Args, inventory: &Inventory) -> AllocationFilter {
    if let Some(name) = &args.hostel {
        let names = inventory.hostel_names();
        if !names.contains(&name.as_str()) {
            tracing::warn!(hostel = %name, known = ?names, "No allocations in hostel");
        }
    }

    AllocationFilter {
        query: args.search.clone().unwrap_or_default(),
        status: args.status,
        hostel_name: args.hostel.clone(),
    }
}

fn print_slip(inventory: &Inventory, student_id: &str) -> Result<()> {
    let Some(allocation) = inventory.allocation_for_student(student_id) else {
        bail!("no active allocation for student '{student_id}'");
    };

    println!("Allocation slip {}", allocation.reference());
    println!("  Student:  {} ({})", allocation.student_name, allocation.student_matric);
    println!("  Hostel:   {}", allocation.hostel_name);
    println!("  Room:     {} / {}", allocation.room_number, allocation.bed_space);
    println!("  Paid:     {} on {}", allocation.amount_paid, allocation.date_allocated);
    println!("  Status:   {}", allocation.status);
    Ok(())
}
