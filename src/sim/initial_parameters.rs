use std::{fs::File, io::BufReader, path::Path};

use serde::Deserialize;
use tracing::debug;

use crate::error::ScenarioError;

use super::{
    body::{Appearance, Body, Rgb},
    trajectory::RetentionPolicy,
    units::{Float, AU, KM},
    vector::Vector,
};

pub(crate) const MOON_DISTANCE: Float = 384_400. * KM;

/// Initial state of one body, as written in a scenario file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BodyParameters {
    pub(crate) name: String,
    pub(crate) position_au: [Float; 2],
    pub(crate) velocity_km_s: [Float; 2],
    pub(crate) mass_kg: Float,
    pub(crate) radius_px: f32,
    pub(crate) color: Rgb,
    #[serde(default)]
    pub(crate) anchor: bool,
}

impl BodyParameters {
    fn on_x_axis(
        name: &str,
        distance_au: Float,
        speed_km_s: Float,
        mass_kg: Float,
        radius_px: f32,
        color: Rgb,
    ) -> BodyParameters {
        BodyParameters {
            name: String::from(name),
            position_au: [distance_au, 0.],
            velocity_km_s: [0., speed_km_s],
            mass_kg,
            radius_px,
            color,
            anchor: false,
        }
    }

    fn into_body(self, index: usize, retention: RetentionPolicy) -> Result<Body, ScenarioError> {
        let position = Vector::from(self.position_au) * AU;
        let velocity = Vector::from(self.velocity_km_s) * KM;
        let body = Body::new(index, self.name, position, velocity, self.mass_kg)?
            .with_appearance(Appearance {
                radius_px: self.radius_px,
                color: self.color,
            })
            .with_retention(retention);
        Ok(if self.anchor { body.as_anchor() } else { body })
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct InitialParameters {
    pub(crate) bodies: Vec<BodyParameters>,
}

impl Default for InitialParameters {
    fn default() -> Self {
        let earth_speed = 29.783;
        let mut sun = BodyParameters::on_x_axis("Sun", 0., 0., 1.98892e30, 5., Rgb::YELLOW);
        sun.anchor = true;
        Self {
            bodies: vec![
                sun,
                BodyParameters::on_x_axis("Mercury", 0.387, -47.4, 3.30e23, 4., Rgb::DARK_GREY),
                BodyParameters::on_x_axis("Venus", 0.723, -35.02, 4.8685e24, 12., Rgb::WHITE),
                BodyParameters::on_x_axis("Earth", -1., earth_speed, 5.9742e24, 12., Rgb::BLUE),
                BodyParameters::on_x_axis(
                    "Moon",
                    -(AU + MOON_DISTANCE) / AU,
                    earth_speed + 1.022,
                    7.34e22,
                    10.,
                    Rgb::DARK_GREY,
                ),
                BodyParameters::on_x_axis("Mars", -1.524, 24.077, 6.39e23, 6., Rgb::RED),
                BodyParameters::on_x_axis("Jupiter", 5.2, -13.1, 1.9e27, 40., Rgb::BROWN),
                BodyParameters::on_x_axis("Saturn", 9.5, -9.7, 5.68e26, 35., Rgb::LIGHT_YELLOW),
                BodyParameters::on_x_axis("Uranus", 19.2, -6.8, 8.68e25, 20., Rgb::DARK_BLUE),
                BodyParameters::on_x_axis("Neptune", 30., -5.4, 1.024e26, 20., Rgb::LIGHT_BLUE),
            ],
        }
    }
}

impl InitialParameters {
    pub(crate) fn from_yaml_file(path: &Path) -> Result<InitialParameters, ScenarioError> {
        let file = File::open(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let params: InitialParameters = serde_yaml::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), bodies = params.bodies.len(), "loaded scenario file");
        Ok(params)
    }

    pub(crate) fn into_bodies(
        self,
        retention: RetentionPolicy,
    ) -> Result<Vec<Body>, ScenarioError> {
        if self.bodies.is_empty() {
            return Err(ScenarioError::Empty);
        }
        self.bodies
            .into_iter()
            .enumerate()
            .map(|(index, params)| params.into_body(index, retention))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::vector;
    use approx::assert_relative_eq;

    #[test]
    fn default_scenario_is_the_solar_system() {
        let bodies = InitialParameters::default()
            .into_bodies(RetentionPolicy::Unbounded)
            .unwrap();

        let names: Vec<&str> = bodies.iter().map(|body| body.name.as_str()).collect();
        let expected = "Sun Mercury Venus Earth Moon Mars Jupiter Saturn Uranus Neptune";
        assert_eq!(names.join(" "), expected);
        let anchors: Vec<&str> = bodies
            .iter()
            .filter(|body| body.is_anchor)
            .map(|body| body.name.as_str())
            .collect();
        assert_eq!(anchors, vec!["Sun"]);
        for (index, body) in bodies.iter().enumerate() {
            assert_eq!(body.index, index);
            assert_eq!(body.trajectory.len(), 0);
        }

        let earth = &bodies[3];
        let moon = &bodies[4];
        assert_relative_eq!(earth.position.x, -AU);
        assert_relative_eq!(earth.velocity.y, 29_783.);
        let earth_moon = vector::distance(&earth.position, &moon.position);
        assert_relative_eq!(earth_moon, MOON_DISTANCE, max_relative = 1e-9);
        let boost = moon.velocity.y - earth.velocity.y;
        assert_relative_eq!(boost, 1_022., max_relative = 1e-9);
        assert_eq!(earth.appearance.color, Rgb::BLUE);
    }

    #[test]
    fn parses_yaml_scenario() {
        let yaml = r#"
bodies:
  - name: Star
    position_au: [0.0, 0.0]
    velocity_km_s: [0.0, 0.0]
    mass_kg: 2.0e30
    radius_px: 8
    color: [255, 255, 0]
    anchor: true
  - name: Rock
    position_au: [1.5, -0.5]
    velocity_km_s: [1.0, 20.0]
    mass_kg: 1.0e24
    radius_px: 3.5
    color: [10, 20, 30]
"#;
        let params: InitialParameters = serde_yaml::from_str(yaml).unwrap();
        let bodies = params.into_bodies(RetentionPolicy::Capped(4)).unwrap();

        assert_eq!(bodies.len(), 2);
        assert!(bodies[0].is_anchor);
        assert!(!bodies[1].is_anchor);
        assert_relative_eq!(bodies[1].position.x, 1.5 * AU);
        assert_relative_eq!(bodies[1].position.y, -0.5 * AU);
        assert_relative_eq!(bodies[1].velocity.y, 20_000.);
        assert_eq!(bodies[1].appearance.color, Rgb::new(10, 20, 30));
        assert_relative_eq!(bodies[1].appearance.radius_px, 3.5);
    }

    #[test]
    fn rejects_unknown_fields() {
        let yaml = "bodies: []\nextra: 1\n";
        let result: Result<InitialParameters, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_empty_scenario() {
        let params = InitialParameters { bodies: vec![] };
        assert!(matches!(
            params.into_bodies(RetentionPolicy::Unbounded),
            Err(ScenarioError::Empty)
        ));
    }

    #[test]
    fn rejects_massless_body() {
        let mut params = InitialParameters::default();
        params.bodies[2].mass_kg = 0.;
        let result = params.into_bodies(RetentionPolicy::Unbounded);
        assert!(matches!(result, Err(ScenarioError::InvalidMass { name, .. }) if name == "Venus"));
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let path = Path::new("does/not/exist.yaml");
        match InitialParameters::from_yaml_file(path) {
            Err(ScenarioError::Io { path: found, .. }) => assert_eq!(found, path),
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn bundled_inner_planets_scenario_loads() {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let path = manifest_dir.join("scenarios/inner_planets.yaml");
        let params = InitialParameters::from_yaml_file(&path).unwrap();
        let bodies = params.into_bodies(RetentionPolicy::Unbounded).unwrap();

        let names: Vec<&str> = bodies.iter().map(|body| body.name.as_str()).collect();
        assert_eq!(names, vec!["Sun", "Venus", "Earth", "Mars", "Moon"]);
        assert_eq!(bodies.iter().filter(|body| body.is_anchor).count(), 1);
    }
}
