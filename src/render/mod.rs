//! Drawing boundary between the simulation and whatever puts pixels on screen.
//!
//! The simulation only ever talks to a [`Surface`]. Coordinates handed to a
//! surface are already in screen pixels, see [`viewport::Viewport`].

pub(crate) mod recorder;
pub(crate) mod viewport;

use crate::{
    error::RenderError,
    sim::{
        body::{Body, Rgb},
        system::StellarSystem,
        units::{Float, KM},
        vector::Vector,
    },
};

use viewport::Viewport;

pub(crate) trait Surface {
    /// Clears the drawing surface.
    fn begin_frame(&mut self) -> Result<(), RenderError>;

    /// Connected polyline through `points`, in order.
    fn draw_trajectory(&mut self, points: &[Vector], color: Rgb) -> Result<(), RenderError>;

    fn draw_disk(&mut self, center: Vector, radius: f32, color: Rgb) -> Result<(), RenderError>;

    fn draw_label(&mut self, position: Vector, text: &str) -> Result<(), RenderError>;

    /// Presents everything drawn since `begin_frame`.
    fn end_frame(&mut self) -> Result<(), RenderError>;

    /// Non-blocking check for a termination request.
    fn poll_quit(&mut self) -> bool;
}

pub(crate) fn distance_label(distance: Float) -> String {
    format!("{:.1}km", distance / KM)
}

fn draw_body<S: Surface>(
    body: &Body,
    viewport: &Viewport,
    surface: &mut S,
) -> Result<(), RenderError> {
    let color = body.appearance.color;
    if body.trajectory.len() > 2 {
        let points: Vec<Vector> = body
            .trajectory
            .iter()
            .map(|point| viewport.world_to_screen(point))
            .collect();
        surface.draw_trajectory(&points, color)?;
    }
    let center = viewport.world_to_screen(&body.position);
    surface.draw_disk(center, body.appearance.radius_px, color)?;
    if !body.is_anchor {
        surface.draw_label(center, &distance_label(body.distance_to_anchor))?;
    }
    Ok(())
}

pub(crate) fn draw_system<S: Surface>(
    system: &StellarSystem,
    viewport: &Viewport,
    surface: &mut S,
) -> Result<(), RenderError> {
    for body in system.bodies.iter() {
        draw_body(body, viewport, surface)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recorder::{DrawCommand, FrameRecorder};
    use crate::sim::{system::UpdateOrder, units::AU};

    fn star_and_planet() -> StellarSystem {
        let star = Body::new(0, "Star", Vector::zeros(), Vector::zeros(), 1.98892e30)
            .unwrap()
            .as_anchor();
        let planet = Body::new(
            1,
            "Planet",
            Vector::new(AU, 0.),
            Vector::new(0., 29_783.),
            5.9742e24,
        )
        .unwrap();
        StellarSystem::from_bodies(vec![star, planet], UpdateOrder::Simultaneous)
    }

    fn render(system: &StellarSystem) -> Vec<DrawCommand> {
        let mut recorder = FrameRecorder::default();
        recorder.begin_frame().unwrap();
        draw_system(system, &Viewport::new(1000, 1000), &mut recorder).unwrap();
        recorder.end_frame().unwrap();
        recorder.presented().to_vec()
    }

    #[test]
    fn label_shows_distance_in_kilometres() {
        assert_eq!(distance_label(149.6e9), "149600000.0km");
        assert_eq!(distance_label(1_234_567.), "1234.6km");
        assert_eq!(distance_label(0.), "0.0km");
    }

    #[test]
    fn short_trajectories_are_not_drawn() {
        let mut system = star_and_planet();
        system.advance().unwrap();
        system.advance().unwrap();

        let commands = render(&system);

        let trajectories = commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Trajectory { .. }))
            .count();
        assert_eq!(trajectories, 0);
    }

    #[test]
    fn anchor_gets_no_label() {
        let mut system = star_and_planet();
        for _ in 0..3 {
            system.advance().unwrap();
        }

        let commands = render(&system);

        let trajectories = commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Trajectory { .. }))
            .count();
        let disks = commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Disk { .. }))
            .count();
        let labels: Vec<&str> = commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(trajectories, 2);
        assert_eq!(disks, 2);
        let expected = distance_label(system.bodies[1].distance_to_anchor);
        assert_eq!(labels, vec![expected.as_str()]);
    }

    #[test]
    fn everything_is_drawn_in_screen_coordinates() {
        let mut system = star_and_planet();
        for _ in 0..3 {
            system.advance().unwrap();
        }
        let viewport = Viewport::new(1000, 1000);

        let commands = render(&system);

        let planet = &system.bodies[1];
        let expected_center = viewport.world_to_screen(&planet.position);
        let expected_path: Vec<Vector> = planet
            .trajectory
            .iter()
            .map(|point| viewport.world_to_screen(point))
            .collect();
        assert!(commands.contains(&DrawCommand::Disk {
            center: expected_center,
            radius: planet.appearance.radius_px,
            color: planet.appearance.color,
        }));
        assert!(commands.contains(&DrawCommand::Trajectory {
            points: expected_path,
            color: planet.appearance.color,
        }));
    }
}
