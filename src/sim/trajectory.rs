use std::collections::VecDeque;

use super::vector::Vector;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum RetentionPolicy {
    #[default]
    Unbounded,
    /// Keep only the newest `n` points.
    Capped(usize),
}

/// Past positions of a body, oldest first.
#[derive(Clone, Debug, Default)]
pub(crate) struct Trajectory {
    points: VecDeque<Vector>,
    policy: RetentionPolicy,
}

impl Trajectory {
    /// Points are allocated as they arrive, whatever the cap.
    pub(crate) fn new(policy: RetentionPolicy) -> Trajectory {
        Trajectory {
            points: VecDeque::new(),
            policy,
        }
    }

    pub(crate) fn push(&mut self, point: Vector) {
        if let RetentionPolicy::Capped(capacity) = self.policy {
            if capacity == 0 {
                return;
            }
            while self.points.len() >= capacity {
                self.points.pop_front();
            }
        }
        self.points.push_back(point);
    }

    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Vector> + '_ {
        self.points.iter()
    }
}
