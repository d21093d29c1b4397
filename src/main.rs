use anyhow::{Context, Result};
use clap::Parser;
use config::Cli;
use gui::{Flags, Gui};
use iced::{window, Application, Settings};
use rate_limiter::RateLimiter;
use render::{recorder::FrameRecorder, viewport::Viewport};
use sim::{
    system::StellarSystem,
    units::{AU, KM},
};
use simulation_loop::{RunSummary, SimulationLoop};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod gui;
mod rate_limiter;
mod render;
mod sim;
mod simulation_loop;

fn log_summary(summary: &RunSummary) {
    let system = &summary.system;
    info!(
        ticks = system.ticks,
        frames_presented = summary.frames_presented,
        days = system.elapsed_days(),
        net_momentum = system.total_momentum().norm(),
        "run finished"
    );
    for body in system.bodies.iter().filter(|body| !body.is_anchor) {
        info!(
            body = %body.name,
            distance_au = body.distance_to_anchor / AU,
            distance_km = body.distance_to_anchor / KM,
            trajectory_points = body.trajectory.len(),
            "distance to anchor"
        );
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let params = cli.initial_parameters().context("failed to load scenario")?;
    let system = StellarSystem::new(params, cli.retention(), cli.update_order)
        .context("invalid scenario")?;
    let limiter = RateLimiter::from_rate(cli.fps);
    let tick_period = limiter.budget();
    let simulation = SimulationLoop::new(
        system,
        FrameRecorder::default(),
        Viewport::new(cli.width, cli.height),
        limiter,
        cli.ticks,
    );

    if cli.headless {
        let summary = simulation.run()?;
        log_summary(&summary);
        return Ok(());
    }

    Gui::run(Settings {
        window: window::Settings {
            size: (cli.width, cli.height),
            ..window::Settings::default()
        },
        antialiasing: true,
        exit_on_close_request: false,
        ..Settings::with_flags(Flags {
            simulation,
            tick_period,
        })
    })
    .context("failed to open the simulation window")
}
