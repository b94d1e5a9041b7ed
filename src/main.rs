use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use agari::{total_fan, AgariTe};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Winning hand to evaluate (.ron file)
    hand: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder.target(env_logger::Target::Stderr).init();

    let args = Args::parse();
    debug!("Loading hand from {}", args.hand.display());

    let file = File::open(&args.hand)?;
    let te: AgariTe = ron::de::from_reader(file)?;

    let yaku = te.evaluate()?;
    let open = te.is_open();
    for y in &yaku {
        println!("{}\t{}", y.name(), y.fan(open));
    }
    println!("total\t{}", total_fan(&yaku, open));

    Ok(())
}
