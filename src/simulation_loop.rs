use tracing::{debug, info};

use crate::{
    error::SimulationError,
    rate_limiter::RateLimiter,
    render::{draw_system, viewport::Viewport, Surface},
    sim::system::StellarSystem,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LoopState {
    Running,
    Stopped,
}

#[derive(Debug)]
pub(crate) struct RunSummary {
    pub(crate) system: StellarSystem,
    pub(crate) frames_presented: u64,
}

/// Owns the bodies and the render surface for the lifetime of a run and
/// alternates physics and drawing, one tick at a time.
pub(crate) struct SimulationLoop<S: Surface> {
    system: StellarSystem,
    surface: S,
    viewport: Viewport,
    limiter: RateLimiter,
    tick_limit: Option<u64>,
    state: LoopState,
    frames_presented: u64,
}

impl<S: Surface> SimulationLoop<S> {
    pub(crate) fn new(
        system: StellarSystem,
        surface: S,
        viewport: Viewport,
        limiter: RateLimiter,
        tick_limit: Option<u64>,
    ) -> SimulationLoop<S> {
        debug!(budget = ?limiter.budget(), ?tick_limit, "render surface acquired");
        SimulationLoop {
            system,
            surface,
            viewport,
            limiter,
            tick_limit,
            state: LoopState::Running,
            frames_presented: 0,
        }
    }

    pub(crate) fn system(&self) -> &StellarSystem {
        &self.system
    }

    pub(crate) fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }

    pub(crate) fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Recentres drawing on a surface of the new size, starting with the next tick.
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        debug!(width, height, "viewport resized");
        self.viewport = Viewport::new(width, height);
    }

    fn stop(&mut self, reason: &str) {
        info!(reason, ticks = self.system.ticks, "simulation stopped");
        self.state = LoopState::Stopped;
    }

    fn tick_limit_reached(&self) -> bool {
        self.tick_limit
            .is_some_and(|limit| self.system.ticks >= limit)
    }

    /// Runs one tick unless the loop has stopped. Quit requests are only
    /// looked at here, between ticks.
    pub(crate) fn tick(&mut self) -> Result<LoopState, SimulationError> {
        if self.state == LoopState::Stopped {
            return Ok(self.state);
        }
        if self.surface.poll_quit() {
            self.stop("quit requested");
            return Ok(self.state);
        }
        if self.tick_limit_reached() {
            self.stop("tick limit reached");
            return Ok(self.state);
        }

        self.surface.begin_frame()?;
        self.system.advance()?;
        draw_system(&self.system, &self.viewport, &mut self.surface)?;
        self.surface.end_frame()?;
        self.frames_presented += 1;

        if self.tick_limit_reached() {
            self.stop("tick limit reached");
        }
        Ok(self.state)
    }

    /// Ticks at the limiter's rate until stopped, then releases the surface
    /// and hands back the final state of the bodies.
    pub(crate) fn run(mut self) -> Result<RunSummary, SimulationError> {
        info!(bodies = self.system.bodies.len(), "simulation running");
        while self.state == LoopState::Running {
            self.limiter.wait();
            self.tick()?;
        }
        let SimulationLoop {
            system,
            surface,
            frames_presented,
            ..
        } = self;
        drop(surface);
        debug!("render surface released");
        Ok(RunSummary {
            system,
            frames_presented,
        })
    }
}
