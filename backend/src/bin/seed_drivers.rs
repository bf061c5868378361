//! One-shot utility seeding the drivers collection with demo records.
//!
//! Lives outside the request-handling contract; the HTTP surface never
//! creates drivers.

use std::io;

use clap::Parser;
use tokio::runtime::Builder;

use kerbside::domain::DriverSeed;
use kerbside::outbound::persistence::{DocumentStore, MongoDriverStore};

/// `seed-drivers` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-drivers",
    about = "Insert demo driver records into the document store",
    version
)]
struct CliArgs {
    /// Document store endpoint.
    #[arg(
        long = "store-connection-uri",
        value_name = "uri",
        default_value = "mongodb://localhost:27017"
    )]
    store_connection_uri: String,
    /// Database holding the drivers collection.
    #[arg(long = "store-database", value_name = "name", default_value = "kerbside")]
    store_database: String,
}

fn demo_drivers() -> Vec<DriverSeed> {
    vec![
        DriverSeed {
            name: "John Doe".into(),
            vehicle_type: "Sedan".into(),
            is_available: true,
            rating: 4.8,
        },
        DriverSeed {
            name: "Alice Smith".into(),
            vehicle_type: "SUV".into(),
            is_available: false,
            rating: 4.5,
        },
        DriverSeed {
            name: "Mark Johnson".into(),
            vehicle_type: "Hatchback".into(),
            is_available: true,
            rating: 4.6,
        },
    ]
}

fn main() -> io::Result<()> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let store = DocumentStore::connect(&args.store_connection_uri, &args.store_database)
        .await
        .map_err(|error| io::Error::other(format!("document store connection failed: {error}")))?;
    let drivers = MongoDriverStore::new(&store);

    for seed in demo_drivers() {
        let id = drivers
            .insert_seed(&seed)
            .await
            .map_err(|error| io::Error::other(format!("insert {}: {error}", seed.name)))?;
        println!("inserted driver {} with id {id}", seed.name);
    }

    let available = drivers
        .available_names(4.5)
        .await
        .map_err(|error| io::Error::other(format!("list available drivers: {error}")))?;
    println!(
        "available drivers rated 4.5 or higher: {}",
        available.join(", ")
    );
    Ok(())
}
