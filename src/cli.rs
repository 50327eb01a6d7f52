use crate::{config::Config, gateways};
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use eventmap_application::prelude as flows;
use eventmap_core::{entities::*, usecases};
use eventmap_db_sqlite::{run_embedded_database_migrations, Connections};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eventmap", about = "Resolve event locations and find nearby ones", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, global = true, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,
}

#[derive(clap::Args)]
pub struct AddressArgs {
    #[arg(long)]
    pub city: String,

    #[arg(long)]
    pub country: String,

    #[arg(long)]
    pub street: Option<String>,
}

#[derive(clap::Args)]
pub struct PositionArgs {
    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve an address and store it as location
    Resolve {
        #[command(flatten)]
        address: AddressArgs,
    },

    /// Add a location with known coordinates
    Add {
        #[command(flatten)]
        address: AddressArgs,

        #[command(flatten)]
        pos: PositionArgs,
    },

    /// Overwrite the address and coordinates of a location
    Update {
        /// Location ID
        id: String,

        #[command(flatten)]
        address: AddressArgs,

        #[command(flatten)]
        pos: PositionArgs,
    },

    /// Show a single location
    Show {
        /// Location ID
        id: String,
    },

    /// List all locations, optionally restricted to a city
    List {
        #[arg(long, requires = "country")]
        city: Option<String>,

        #[arg(long, requires = "city")]
        country: Option<String>,
    },

    /// Find all locations within a distance, nearest first
    Near {
        #[command(flatten)]
        pos: PositionArgs,

        /// Maximum distance in kilometers
        #[arg(long, default_value_t = 10.0)]
        max_distance: f64,
    },
}

fn new_location(address: AddressArgs, pos: PositionArgs) -> usecases::NewLocation {
    let AddressArgs {
        city,
        country,
        street,
    } = address;
    let PositionArgs { lat, lng } = pos;
    usecases::NewLocation {
        city,
        country,
        street,
        lat,
        lng,
    }
}

fn print_location(location: &Location) {
    let Location {
        id,
        address,
        place_id,
        formatted_address,
        pos,
    } = location;
    let pos = pos
        .map(|pos| pos.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("{id}\t{pos}\t{}", address.to_query_string());
    if let Some(place_id) = place_id {
        println!("\tplace: {place_id}");
    }
    if let Some(formatted_address) = formatted_address {
        println!("\taddress: {formatted_address}");
    }
}

pub fn run() -> Result<()> {
    let args = Cli::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    run_embedded_database_migrations(connections.exclusive()?)?;

    match args.command {
        Commands::Resolve { address } => {
            let geo = gateways::geocoding_gateway(&cfg.geocoding)?
                .ok_or_else(|| anyhow!("Addresses cannot be resolved without a geocoding gateway"))?;
            let AddressArgs {
                city,
                country,
                street,
            } = address;
            let input = usecases::ResolveLocation {
                city,
                country,
                street,
            };
            match flows::resolve_location(&connections, &*geo, input)? {
                Some(location) => print_location(&location),
                None => println!("The address could not be resolved"),
            }
        }
        Commands::Add { address, pos } => {
            let location = flows::create_location(&connections, new_location(address, pos))?;
            print_location(&location);
        }
        Commands::Update { id, address, pos } => {
            let location =
                flows::update_location(&connections, &id, new_location(address, pos))?;
            print_location(&location);
        }
        Commands::Show { id } => {
            let location = flows::get_location(&connections, &id)?;
            print_location(&location);
        }
        Commands::List { city, country } => {
            let locations = match (city, country) {
                (Some(city), Some(country)) => {
                    flows::locations_in_city(&connections, &city, &country)?
                }
                _ => flows::all_locations(&connections)?,
            };
            for location in &locations {
                print_location(location);
            }
        }
        Commands::Near { pos, max_distance } => {
            let PositionArgs { lat, lng } = pos;
            for (location, distance) in
                flows::nearby_locations(&connections, lat, lng, max_distance)?
            {
                println!("{distance}");
                print_location(&location);
            }
        }
    }
    Ok(())
}
