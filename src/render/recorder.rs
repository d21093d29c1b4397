use tracing::trace;

use crate::{
    error::RenderError,
    sim::{body::Rgb, vector::Vector},
};

use super::Surface;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DrawCommand {
    Trajectory { points: Vec<Vector>, color: Rgb },
    Disk {
        center: Vector,
        radius: f32,
        color: Rgb,
    },
    Label { position: Vector, text: String },
}

/// A [`Surface`] that keeps the last presented frame as a list of draw commands.
///
/// Commands go into a pending frame between `begin_frame` and `end_frame`;
/// `end_frame` swaps it in as the presented one. Whoever owns the actual
/// window replays [`FrameRecorder::presented`].
#[derive(Debug, Default)]
pub(crate) struct FrameRecorder {
    pending: Option<Vec<DrawCommand>>,
    presented: Vec<DrawCommand>,
    frames_presented: u64,
    quit_requested: bool,
}

impl FrameRecorder {
    pub(crate) fn presented(&self) -> &[DrawCommand] {
        &self.presented
    }

    pub(crate) fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), RenderError> {
        self.pending
            .as_mut()
            .ok_or(RenderError::FrameNotStarted)?
            .push(command);
        Ok(())
    }
}

impl Surface for FrameRecorder {
    fn begin_frame(&mut self) -> Result<(), RenderError> {
        if self.pending.is_some() {
            return Err(RenderError::FrameAlreadyStarted);
        }
        self.pending = Some(Vec::with_capacity(self.presented.len()));
        Ok(())
    }

    fn draw_trajectory(&mut self, points: &[Vector], color: Rgb) -> Result<(), RenderError> {
        self.record(DrawCommand::Trajectory {
            points: points.to_vec(),
            color,
        })
    }

    fn draw_disk(&mut self, center: Vector, radius: f32, color: Rgb) -> Result<(), RenderError> {
        self.record(DrawCommand::Disk {
            center,
            radius,
            color,
        })
    }

    fn draw_label(&mut self, position: Vector, text: &str) -> Result<(), RenderError> {
        self.record(DrawCommand::Label {
            position,
            text: String::from(text),
        })
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        let frame = self.pending.take().ok_or(RenderError::FrameNotStarted)?;
        self.presented = frame;
        self.frames_presented += 1;
        trace!(
            frame = self.frames_presented,
            commands = self.presented.len(),
            "frame presented"
        );
        Ok(())
    }

    fn poll_quit(&mut self) -> bool {
        self.quit_requested
    }
}
