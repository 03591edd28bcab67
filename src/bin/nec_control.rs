//! Command line tool to set power and backlight of a display

use clap::{Parser, ValueEnum};
use nec_pd_rust::{Error, PDSession};
use tracing_subscriber::{EnvFilter, fmt};

/// Control power and backlight of NEC displays over TCP
#[derive(Parser, Debug)]
#[command(name = "nec-control")]
#[command(about = "Control power and backlight of NEC displays over TCP")]
#[command(version)]
struct Args {
    /// Address to connect to
    #[arg(short, long, default_value = "10.0.0.240")]
    address: String,

    /// Port to connect to
    #[arg(long, default_value_t = 7142)]
    port: u16,

    /// Set power to on or off
    #[arg(short, long, value_enum)]
    power: Option<PowerState>,

    /// Set backlight to a specific value
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    backlight: Option<u8>,

    /// Speak more to me
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PowerState {
    On,
    Off,
}

fn main() {
    let args = Args::parse();

    // Log to stderr so the reply dump on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Not able to set the parameter: \"{e}\"");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    tracing::info!("connecting to {}:{}", args.address, args.port);
    let mut session = PDSession::new_from_tcp(&args.address, args.port)?;
    tracing::info!("connected");

    if let Some(state) = args.power {
        let reply = match state {
            PowerState::On => session.set_power_on()?,
            PowerState::Off => session.set_power_off()?,
        };
        println!("{}", hex_dump(&reply));
    }

    if let Some(backlight) = args.backlight {
        let reply = session.set_backlight(backlight)?;
        println!("{}", hex_dump(&reply));
    }

    Ok(())
}

/// Format reply bytes as space-separated lowercase hex pairs
fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
