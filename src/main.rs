use crate::board::{BoardKind, horizontal_line, line_title};
use crate::booking::flow::BookingFlow;
use crate::console::TerminalConsole;
use crate::distance::DistanceModel;
use crate::error::{BookingError, ConsoleError};
use crate::flavor::Flavor;
use crate::network::Network;
use chrono::Local;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod board;
mod boarding;
mod booking;
mod checkout;
mod city;
mod console;
mod distance;
mod error;
mod fare;
mod flavor;
mod luggage;
mod money;
mod network;
mod prompt;
mod trip;

#[derive(Parser)]
struct Args {
    /// Path to a JSON network file; the bundled Air Ontario network when omitted
    #[arg(short, long, value_name = "FILE")]
    network: Option<PathBuf>,

    /// How distances between cities are measured for fares
    #[arg(short, long, value_enum, default_value_t = DistanceModel::Geodesic)]
    distance: DistanceModel,

    /// Seed for the made-up flight details, for reproducible screens
    #[arg(long)]
    seed: Option<u64>,

    /// Go straight to booking without printing the arrivals and departures board
    #[arg(long)]
    no_board: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let network = match &args.network {
        Some(path) => Network::load_from_file(path)?,
        None => Network::bundled()?,
    };
    info!(
        cities = network.cities.len(),
        carriers = network.carriers.len(),
        source = %args.network.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "bundled".to_string()),
        "network loaded"
    );

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut flavor = Flavor::new(rng, &network.carriers);

    println!("\n{}", line_title("AIR ONTARIO"));
    println!("{:^82}\n", Local::now().format("%Y-%m-%d %H:%M:%S").to_string());

    if !args.no_board {
        for kind in [BoardKind::Arrivals, BoardKind::Departures] {
            let rows = board::rows(kind, &network.cities, &mut flavor);
            println!("{}", line_title(kind.title()));
            println!("{}", board::render(kind, &rows));
        }
        println!();
        println!("{}", line_title("Thank you for choosing Air Ontario"));
        println!("\n{}", horizontal_line());
    }

    let console = TerminalConsole::new(network.cities.spellings())?;
    let today = Local::now().date_naive();
    let mut flow = BookingFlow::new(&network, console, today, args.distance, flavor);

    match flow.run() {
        Ok(booking) => {
            info!(
                flight = %booking.boarding_pass.flight,
                seat = %booking.boarding_pass.seat,
                class = %booking.selection.quote.class,
                tier = ?booking.luggage.tier,
                bags = booking.luggage.bags.len(),
                "boarding pass issued"
            );
            Ok(())
        }
        Err(BookingError::Console(ConsoleError::Closed)) => {
            println!("Booking cancelled.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
