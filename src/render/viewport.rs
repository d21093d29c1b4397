use crate::sim::{
    units::{Float, AU},
    vector::Vector,
};

/// Pixels per metre: one astronomical unit spans 200 pixels.
pub(crate) const SCALE: Float = 200. / AU;

/// Maps the heliocentric plane onto the window, origin at the window centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Viewport {
    scale: Float,
    center: Vector,
}

impl Viewport {
    pub(crate) fn new(width: u32, height: u32) -> Viewport {
        Viewport {
            scale: SCALE,
            center: Vector::new(width as Float / 2., height as Float / 2.),
        }
    }

    pub(crate) fn world_to_screen(&self, world: &Vector) -> Vector {
        *world * self.scale + self.center
    }

    pub(crate) fn screen_to_world(&self, screen: &Vector) -> Vector {
        (*screen - self.center) / self.scale
    }
}
