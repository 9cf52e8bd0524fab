use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use seabattle::{
    default_fleet, init_logging, place_fleet, render, Grid, BANNER, GRID_SIZE,
};
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about = "Generate a randomized Sea Battle board")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for a reproducible layout (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = GRID_SIZE, help = "Grid side length")]
    size: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut grid = Grid::new(cli.size);
    let mut fleet = default_fleet();
    fleet.shuffle(&mut rng);
    place_fleet(&mut grid, &fleet, &mut rng)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", BANNER)?;
    render(&grid, &mut out)?;
    Ok(())
}
