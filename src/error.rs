//! Error types for the simulator

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub(crate) enum GravityError {
    #[error("body {body} cannot attract itself")]
    SelfAttraction { body: String },

    #[error("no body at index {index}")]
    UnknownBody { index: usize },
}

/// Errors raised while building the initial body set
#[derive(Error, Debug)]
pub(crate) enum ScenarioError {
    #[error("could not read scenario file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("scenario contains no bodies")]
    Empty,

    #[error("body {name} has mass {mass}, but masses must be positive and finite")]
    InvalidMass { name: String, mass: f64 },

    #[error("body {name} has a non-finite initial position or velocity")]
    NonFiniteState { name: String },
}

/// Errors reported by a render surface
#[derive(Error, Debug, PartialEq)]
pub(crate) enum RenderError {
    #[error("draw call issued outside of a frame")]
    FrameNotStarted,

    #[error("frame started twice without being presented")]
    FrameAlreadyStarted,
}

#[derive(Error, Debug)]
pub(crate) enum SimulationError {
    #[error("gravity error: {0}")]
    Gravity(#[from] GravityError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}
