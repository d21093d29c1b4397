use std::path::PathBuf;

use clap::Parser;

use crate::{
    error::ScenarioError,
    sim::{initial_parameters::InitialParameters, system::UpdateOrder, trajectory::RetentionPolicy},
};

#[derive(Parser, Debug)]
#[command(name = "planet_simulation")]
#[command(about = "Newtonian gravity simulation of the solar system")]
pub(crate) struct Cli {
    /// Window width in pixels
    #[arg(long, default_value_t = 1920)]
    pub(crate) width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 1080)]
    pub(crate) height: u32,

    /// Simulation ticks per second of wall-clock time
    #[arg(
        long,
        default_value_t = 60,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub(crate) fps: u32,

    /// Whether bodies see each other's positions from before or during the current tick
    #[arg(long, value_enum, default_value_t = UpdateOrder::Simultaneous)]
    pub(crate) update_order: UpdateOrder,

    /// Keep only the newest N trajectory points per body instead of the whole history
    #[arg(long, value_name = "N")]
    pub(crate) trail_limit: Option<usize>,

    /// YAML scenario file; the built-in solar system is used when absent
    #[arg(long, value_name = "PATH")]
    pub(crate) scenario: Option<PathBuf>,

    /// Run without a window
    #[arg(long, requires = "ticks")]
    pub(crate) headless: bool,

    /// Number of ticks to simulate in headless mode
    #[arg(long, value_name = "N", requires = "headless")]
    pub(crate) ticks: Option<u64>,
}

impl Cli {
    pub(crate) fn retention(&self) -> RetentionPolicy {
        match self.trail_limit {
            Some(limit) => RetentionPolicy::Capped(limit),
            None => RetentionPolicy::Unbounded,
        }
    }

    pub(crate) fn initial_parameters(&self) -> Result<InitialParameters, ScenarioError> {
        match &self.scenario {
            Some(path) => InitialParameters::from_yaml_file(path),
            None => Ok(InitialParameters::default()),
        }
    }
}
