//! # Hotel Reservations CLI
//!
//! Command-line access to the reservation system. Every invocation opens the system on
//! the configured data directory, runs one command, prints the result as pretty JSON and
//! shuts the actors down.
//!
//! ```bash
//! hotel-reservations hotel add H1 "Grand Hotel" 10
//! hotel-reservations customer add C1 "Ana"
//! hotel-reservations reservation create R1 C1 H1
//! hotel-reservations reservation cancel R1
//! hotel-reservations reconcile --repair
//! ```
//!
//! Configuration comes from `HOTEL_DATA_DIR` / `HOTEL_CHANNEL_CAPACITY` (a `.env` file is
//! read first); `--data-dir` overrides the directory. Logs follow `RUST_LOG` and go to
//! stderr.

use clap::{Parser, Subcommand};
use hotel_reservations::clients::ActorClient;
use hotel_reservations::config::{ConfigError, StoreConfig};
use hotel_reservations::error::ErrorKind;
use hotel_reservations::lifecycle::{ReservationSystem, SystemError};
use hotel_reservations::model::{CustomerCreate, HotelCreate, ReservationCreate};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use store_actor::tracing::setup_tracing;
use thiserror::Error;
use tracing::{error, Instrument};

/// Hotel reservation management
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the JSON collections
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage customers
    #[command(subcommand)]
    Customer(CustomerCommand),
    /// Manage hotels
    #[command(subcommand)]
    Hotel(HotelCommand),
    /// Create, cancel and inspect reservations
    #[command(subcommand)]
    Reservation(ReservationCommand),
    /// Compare hotel availability with active reservations
    Reconcile {
        /// Correct drifting hotels one room at a time
        #[arg(long)]
        repair: bool,
    },
}

#[derive(Subcommand)]
enum CustomerCommand {
    /// Create a customer
    Add { customer_id: String, name: String },
    /// Change a customer's name
    Rename { customer_id: String, name: String },
    /// Delete a customer (reservations are kept)
    Remove { customer_id: String },
    /// Show one customer
    Show { customer_id: String },
    /// List all customers
    List,
}

#[derive(Subcommand)]
enum HotelCommand {
    /// Create a hotel with every room available
    Add {
        hotel_id: String,
        name: String,
        rooms_total: u32,
    },
    /// Change a hotel's name
    Rename { hotel_id: String, name: String },
    /// Show one hotel
    Show { hotel_id: String },
    /// List all hotels
    List,
}

#[derive(Subcommand)]
enum ReservationCommand {
    /// Reserve one room of a hotel for a customer
    Create {
        reservation_id: String,
        customer_id: String,
        hotel_id: String,
    },
    /// Cancel a reservation and give its room back
    Cancel { reservation_id: String },
    /// Show one reservation
    Show { reservation_id: String },
    /// List all reservations
    List,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    System(#[from] SystemError),
    #[error("{0} not found")]
    Missing(String),
    #[error("Could not render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    fn kind(&self) -> Option<ErrorKind> {
        match self {
            CliError::System(e) => Some(e.kind()),
            CliError::Missing(_) => Some(ErrorKind::NotFound),
            CliError::Config(_) | CliError::Output(_) => None,
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn found<T>(what: &str, id: &str, item: Option<T>) -> Result<T, CliError> {
    item.ok_or_else(|| CliError::Missing(format!("{what} {id}")))
}

async fn run_customer(system: &ReservationSystem, command: CustomerCommand) -> Result<(), CliError> {
    let customers = &system.customer_client;
    match command {
        CustomerCommand::Add { customer_id, name } => {
            let customer = customers
                .create_customer(CustomerCreate { customer_id, name })
                .await
                .map_err(SystemError::from)?;
            print_json(&customer)
        }
        CustomerCommand::Rename { customer_id, name } => {
            let customer = customers
                .rename_customer(customer_id, name)
                .await
                .map_err(SystemError::from)?;
            print_json(&customer)
        }
        CustomerCommand::Remove { customer_id } => {
            customers
                .delete_customer(customer_id.clone())
                .await
                .map_err(SystemError::from)?;
            print_json(&serde_json::json!({ "deleted": customer_id }))
        }
        CustomerCommand::Show { customer_id } => {
            let customer = customers
                .get(customer_id.clone())
                .await
                .map_err(SystemError::from)?;
            print_json(&found("customer", &customer_id, customer)?)
        }
        CustomerCommand::List => print_json(&customers.list().await.map_err(SystemError::from)?),
    }
}

async fn run_hotel(system: &ReservationSystem, command: HotelCommand) -> Result<(), CliError> {
    let hotels = &system.hotel_client;
    match command {
        HotelCommand::Add {
            hotel_id,
            name,
            rooms_total,
        } => {
            let hotel = hotels
                .create_hotel(HotelCreate {
                    hotel_id,
                    name,
                    rooms_total,
                })
                .await
                .map_err(SystemError::from)?;
            print_json(&hotel)
        }
        HotelCommand::Rename { hotel_id, name } => {
            let hotel = hotels
                .rename_hotel(hotel_id, name)
                .await
                .map_err(SystemError::from)?;
            print_json(&hotel)
        }
        HotelCommand::Show { hotel_id } => {
            let hotel = hotels.get(hotel_id.clone()).await.map_err(SystemError::from)?;
            print_json(&found("hotel", &hotel_id, hotel)?)
        }
        HotelCommand::List => print_json(&hotels.list().await.map_err(SystemError::from)?),
    }
}

async fn run_reservation(
    system: &ReservationSystem,
    command: ReservationCommand,
) -> Result<(), CliError> {
    let reservations = &system.reservation_client;
    match command {
        ReservationCommand::Create {
            reservation_id,
            customer_id,
            hotel_id,
        } => {
            let span = tracing::info_span!("reservation_create", %reservation_id);
            let reservation = reservations
                .create_reservation(ReservationCreate {
                    reservation_id,
                    customer_id,
                    hotel_id,
                })
                .instrument(span)
                .await
                .map_err(SystemError::from)?;
            print_json(&reservation)
        }
        ReservationCommand::Cancel { reservation_id } => {
            let span = tracing::info_span!("reservation_cancel", %reservation_id);
            let reservation = reservations
                .cancel_reservation(reservation_id)
                .instrument(span)
                .await
                .map_err(SystemError::from)?;
            print_json(&reservation)
        }
        ReservationCommand::Show { reservation_id } => {
            let reservation = reservations
                .get(reservation_id.clone())
                .await
                .map_err(SystemError::from)?;
            print_json(&found("reservation", &reservation_id, reservation)?)
        }
        ReservationCommand::List => {
            print_json(&reservations.list().await.map_err(SystemError::from)?)
        }
    }
}

async fn run(system: &ReservationSystem, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Customer(command) => run_customer(system, command).await,
        Commands::Hotel(command) => run_hotel(system, command).await,
        Commands::Reservation(command) => run_reservation(system, command).await,
        Commands::Reconcile { repair } => print_json(&system.reconcile(repair).await?),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    let cli = Cli::parse();

    let config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config = match cli.data_dir {
        Some(dir) => config.with_data_dir(dir),
        None => config,
    };

    let system = ReservationSystem::open(&config);
    let outcome = run(&system, cli.command).await;
    let shutdown = system.shutdown().await.map_err(CliError::from);

    match outcome.and(shutdown) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            match e.kind() {
                Some(kind) => eprintln!("error [{kind}]: {e}"),
                None => eprintln!("error: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}
