use tracing::{info, warn};

use crate::{
    error::{GravityError, ScenarioError},
    sim::body::Body,
    sim::initial_parameters::InitialParameters,
    sim::trajectory::RetentionPolicy,
    sim::units::{Float, G, SECONDS_PER_DAY, TIMESTEP},
    sim::vector::{self, Vector},
};

/// How the bodies of one tick see each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum UpdateOrder {
    /// Every force is computed from the positions before the tick.
    #[default]
    Simultaneous,
    /// Bodies move one after another; later bodies see the already moved earlier ones.
    Sequential,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Attraction {
    pub(crate) force: Vector,
    pub(crate) distance: Float,
    pub(crate) toward_anchor: bool,
}

#[derive(Clone, Copy, Debug)]
struct NetForce {
    force: Vector,
    anchor_distance: Option<Float>,
}

#[derive(Clone, Debug)]
pub(crate) struct StellarSystem {
    pub(crate) ticks: u64,
    pub(crate) bodies: Vec<Body>,
    pub(crate) update_order: UpdateOrder,
}

impl StellarSystem {
    pub(crate) fn new(
        params: InitialParameters,
        retention: RetentionPolicy,
        update_order: UpdateOrder,
    ) -> Result<StellarSystem, ScenarioError> {
        let bodies = params.into_bodies(retention)?;
        let anchors = bodies.iter().filter(|body| body.is_anchor).count();
        if anchors != 1 {
            warn!(
                anchors,
                "scenario should designate exactly one anchor, distance readouts will be misleading"
            );
        }
        info!(
            bodies = bodies.len(),
            anchors,
            ?update_order,
            ?retention,
            "built stellar system"
        );
        Ok(Self::from_bodies(bodies, update_order))
    }

    pub(crate) fn from_bodies(bodies: Vec<Body>, update_order: UpdateOrder) -> StellarSystem {
        StellarSystem {
            ticks: 0,
            bodies,
            update_order,
        }
    }

    /// Newtonian attraction of `attracted` towards `attracting`.
    ///
    /// Bodies sharing a position are not guarded against: the result is not finite.
    pub(crate) fn pairwise_force(
        attracted: &Body,
        attracting: &Body,
    ) -> Result<Attraction, GravityError> {
        if attracted == attracting {
            return Err(GravityError::SelfAttraction {
                body: attracted.name.clone(),
            });
        }
        let distance = vector::distance(&attracted.position, &attracting.position);
        let magnitude = G * attracted.mass() * attracting.mass() / (distance * distance);
        let theta = vector::angle(&attracted.position, &attracting.position);
        Ok(Attraction {
            force: Vector::new(theta.cos() * magnitude, theta.sin() * magnitude),
            distance,
            toward_anchor: attracting.is_anchor,
        })
    }

    fn get_net_force(target: &Body, bodies: &[Body]) -> Result<NetForce, GravityError> {
        let mut net = NetForce {
            force: Vector::zeros(),
            anchor_distance: None,
        };
        for other in bodies.iter().filter(|other| *other != target) {
            let attraction = Self::pairwise_force(target, other)?;
            net.force += attraction.force;
            if attraction.toward_anchor {
                net.anchor_distance = Some(attraction.distance);
            }
        }
        Ok(net)
    }

    fn apply(body: &mut Body, net: &NetForce) {
        if let Some(distance) = net.anchor_distance {
            body.distance_to_anchor = distance;
        }
        body.integrate(&net.force, TIMESTEP);
    }

    /// Moves a single body against the current state of all the others.
    pub(crate) fn step(&mut self, index: usize) -> Result<(), GravityError> {
        let target = self
            .bodies
            .get(index)
            .ok_or(GravityError::UnknownBody { index })?;
        let net = Self::get_net_force(target, &self.bodies)?;
        Self::apply(&mut self.bodies[index], &net);
        Ok(())
    }

    /// Advances every body by one tick.
    pub(crate) fn advance(&mut self) -> Result<(), GravityError> {
        match self.update_order {
            UpdateOrder::Sequential => {
                for index in 0..self.bodies.len() {
                    self.step(index)?;
                }
            }
            UpdateOrder::Simultaneous => {
                // Read-only pass over the pre-tick state, then the update pass.
                let net_forces = self
                    .bodies
                    .iter()
                    .map(|body| Self::get_net_force(body, &self.bodies))
                    .collect::<Result<Vec<NetForce>, GravityError>>()?;
                for (body, net) in self.bodies.iter_mut().zip(net_forces.iter()) {
                    Self::apply(body, net);
                }
            }
        }
        self.ticks += 1;
        Ok(())
    }

    pub(crate) fn elapsed_days(&self) -> Float {
        self.ticks as Float * TIMESTEP / SECONDS_PER_DAY
    }

    pub(crate) fn total_momentum(&self) -> Vector {
        self.bodies.iter().map(Body::momentum).sum()
    }
}
