//! gridline - rasterize a grid line segment from the command line.
//!
//! Prints one `x,y` cell per line. With `--trace` (interpolation only) also
//! prints every sample: parameter, continuous point and rounded cell.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use gridline::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "gridline", version, about = "Grid line rasterization")]
struct Cli {
    /// Demonstration preset (intro, algorithm, sampling, variations)
    #[arg(short, long)]
    preset: Option<Preset>,

    /// Start cell, `x,y`
    #[arg(long, allow_hyphen_values = true)]
    from: Option<GridPoint>,

    /// End cell, `x,y`
    #[arg(long, allow_hyphen_values = true)]
    to: Option<GridPoint>,

    /// Rasterization algorithm (interpolation, supercover, orthogonal)
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Interpolation step count override
    #[arg(long)]
    steps: Option<u64>,

    /// Supercover oversampling factor
    #[arg(long)]
    factor: Option<u32>,

    /// Cells per side of the grid
    #[arg(short, long)]
    grid_size: Option<u32>,

    /// Configuration file (defaults to <config dir>/gridline/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the interpolation sample trace
    #[arg(long)]
    trace: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Load the configuration file and layer CLI flags over it.
    fn config(&self) -> Result<GridlineConfig> {
        let file = match &self.config {
            Some(path) => GridlineConfig::load(path)?,
            None => GridlineConfig::default_path()
                .map(GridlineConfig::load_or_default)
                .unwrap_or_default(),
        };
        file.with_overrides(&self.overrides())
    }

    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            preset: self.preset,
            grid_size: self.grid_size,
            point_a: self.from,
            point_b: self.to,
            algorithm: self.algorithm,
            supercover_factor: self.factor,
            steps: self.steps,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config()?;
    let segment = config.segment()?;
    let bounds = config.bounds()?;

    if cli.trace && config.algorithm == Algorithm::Interpolation {
        let traced = match config.effective_steps()? {
            Some(steps) => rasterize_steps(segment.p0, segment.p1, steps),
            None => rasterize_traced(segment.p0, segment.p1),
        };
        println!("# step t x y cell");
        for (step, sample) in traced.trace.iter().enumerate() {
            println!(
                "{step} {:.3} {:.3} {:.3} {},{}",
                sample.t, sample.continuous.x, sample.continuous.y, sample.rounded.x, sample.rounded.y
            );
        }
    } else if cli.trace {
        log::warn!("--trace only applies to interpolation; ignoring");
    }

    let cells = config.rasterizer()?.rasterize_within(segment, bounds)?;
    println!("# {} {} -> {}: {} cells", config.algorithm, segment.p0, segment.p1, cells.len());
    for cell in &cells {
        println!("{},{}", cell.x, cell.y);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridline: {e}");
            ExitCode::FAILURE
        }
    }
}
