use serde::Deserialize;

use crate::error::ScenarioError;

use super::{
    trajectory::{RetentionPolicy, Trajectory},
    units::Float,
    vector::Vector,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "[u8; 3]")]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb { r, g, b }
    }
}

impl Rgb {
    pub(crate) const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub(crate) const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub(crate) const BLUE: Rgb = Rgb::new(100, 149, 237);
    pub(crate) const RED: Rgb = Rgb::new(188, 39, 50);
    pub(crate) const DARK_GREY: Rgb = Rgb::new(80, 78, 81);
    pub(crate) const BROWN: Rgb = Rgb::new(200, 102, 0);
    pub(crate) const DARK_BLUE: Rgb = Rgb::new(0, 0, 255);
    pub(crate) const LIGHT_YELLOW: Rgb = Rgb::new(255, 255, 102);
    pub(crate) const LIGHT_BLUE: Rgb = Rgb::new(0, 204, 204);

    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }
}

/// How a body is drawn. Irrelevant to the physics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Appearance {
    pub(crate) radius_px: f32,
    pub(crate) color: Rgb,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            radius_px: 5.,
            color: Rgb::WHITE,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Body {
    pub(crate) index: usize,
    pub(crate) name: String,
    pub(crate) position: Vector,
    pub(crate) velocity: Vector,
    mass: Float,
    pub(crate) is_anchor: bool,
    pub(crate) distance_to_anchor: Float,
    pub(crate) trajectory: Trajectory,
    pub(crate) appearance: Appearance,
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Body {
    pub(crate) fn new(
        index: usize,
        name: impl Into<String>,
        position: Vector,
        velocity: Vector,
        mass: Float,
    ) -> Result<Body, ScenarioError> {
        let name = name.into();
        if !(mass.is_finite() && mass > 0.) {
            return Err(ScenarioError::InvalidMass { name, mass });
        }
        if !(position.iter().all(|x| x.is_finite()) && velocity.iter().all(|v| v.is_finite())) {
            return Err(ScenarioError::NonFiniteState { name });
        }
        Ok(Body {
            index,
            name,
            position,
            velocity,
            mass,
            is_anchor: false,
            distance_to_anchor: 0.,
            trajectory: Trajectory::default(),
            appearance: Appearance::default(),
        })
    }

    pub(crate) fn as_anchor(mut self) -> Body {
        self.is_anchor = true;
        self
    }

    pub(crate) fn with_appearance(mut self, appearance: Appearance) -> Body {
        self.appearance = appearance;
        self
    }

    pub(crate) fn with_retention(mut self, policy: RetentionPolicy) -> Body {
        self.trajectory = Trajectory::new(policy);
        self
    }

    pub(crate) fn mass(&self) -> Float {
        self.mass
    }

    pub(crate) fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }

    /// Explicit Euler: velocity first, then position with the new velocity.
    pub(crate) fn integrate(&mut self, total_force: &Vector, time_step: Float) {
        self.velocity += *total_force / self.mass * time_step;
        self.position += self.velocity * time_step;
        self.trajectory.push(self.position);
    }
}
