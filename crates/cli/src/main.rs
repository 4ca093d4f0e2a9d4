//! Dossier CLI — the presentation collaborator for the record store.
//!
//! Collects user input, invokes `dossier-core` through its public contract,
//! and renders the returned records. All validation that the store itself
//! does not perform (non-empty names) happens here, at the boundary.

use anyhow::Context;
use clap::{Parser, Subcommand};
use dossier_core::constants::DEFAULT_DATA_DIR;
use dossier_core::{NonEmptyText, Record, RecordStore};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dossier")]
#[command(about = "Per-record folder manager: metadata plus copied attachments")]
struct Cli {
    /// Base directory for record storage (falls back to DOSSIER_DATA_DIR,
    /// then to "records")
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all records, most recently saved first
    List,
    /// Add a new record, copying any attachments into its folder
    Add {
        /// First name (must be non-empty)
        first_name: String,
        /// Last name (must be non-empty)
        last_name: String,
        /// Photo to copy in (optional)
        #[arg(long)]
        photo: Option<PathBuf>,
        /// Generic file to copy in (repeatable)
        #[arg(long = "file")]
        files: Vec<PathBuf>,
    },
    /// Show one record in detail
    Show {
        /// Record UUID
        id: String,
    },
    /// Delete a record and all its files (irreversible)
    Delete {
        /// Record UUID
        id: String,
    },
}

/// Resolves the base directory once at startup: flag, then environment,
/// then the built-in default. The core never reads the environment itself.
fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("DOSSIER_DATA_DIR").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

fn print_record_line(record: &Record) {
    println!(
        "ID: {}, Name: {} {}, Saved: {}",
        record.id, record.first_name, record.last_name, record.saved_at
    );
}

fn print_record_detail(record: &Record) {
    println!("Name:     {} {}", record.first_name, record.last_name);
    println!("Saved:    {}", record.saved_at);
    println!("Folder:   {}", record.directory.display());
    match record.photo_path() {
        Some(path) => println!("Photo:    {}", path.display()),
        None => println!("Photo:    (none)"),
    }
    if record.files.is_empty() {
        println!("Files:    (none)");
    } else {
        println!("Files:");
        for path in record.file_paths() {
            println!("  {}", path.display());
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store = RecordStore::new(resolve_data_dir(cli.data_dir))?;

    match cli.command {
        Commands::List => {
            let records = store.list();
            if records.is_empty() {
                println!("No records found.");
            } else {
                for record in &records {
                    print_record_line(record);
                }
            }
        }
        Commands::Add {
            first_name,
            last_name,
            photo,
            files,
        } => {
            let first = NonEmptyText::new(&first_name).context("first name cannot be empty")?;
            let last = NonEmptyText::new(&last_name).context("last name cannot be empty")?;

            let record = store.create(first.as_str(), last.as_str(), photo.as_deref(), &files)?;
            println!(
                "Saved {} {} with ID: {}",
                record.first_name, record.last_name, record.id
            );
        }
        Commands::Show { id } => {
            let record = store
                .get(&id)
                .with_context(|| format!("no readable record with ID {id}"))?;
            print_record_detail(&record);
        }
        Commands::Delete { id } => {
            let record = store
                .get(&id)
                .with_context(|| format!("no readable record with ID {id}"))?;
            store.delete(&record)?;
            println!(
                "Deleted {} {} ({})",
                record.first_name, record.last_name, record.id
            );
        }
    }

    Ok(())
}
