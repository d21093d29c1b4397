use nalgebra::Vector2;

use super::units::Float;

pub(crate) type Vector = Vector2<Float>;

pub(crate) fn distance(from: &Vector, to: &Vector) -> Float {
    (to - from).norm()
}

/// Direction of `to` as seen from `from`, in radians.
pub(crate) fn angle(from: &Vector, to: &Vector) -> Float {
    let difference = to - from;
    difference.y.atan2(difference.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn distance_is_euclidean() {
        let a = Vector::new(1., 2.);
        let b = Vector::new(4., 6.);
        assert_relative_eq!(distance(&a, &b), 5.);
        assert_relative_eq!(distance(&b, &a), 5.);
    }

    #[test]
    fn angle_points_from_first_to_second() {
        let origin = Vector::zeros();
        assert_relative_eq!(angle(&origin, &Vector::new(1., 0.)), 0.);
        assert_relative_eq!(angle(&origin, &Vector::new(0., 1.)), PI / 2.);
        assert_relative_eq!(angle(&origin, &Vector::new(-1., 0.)), PI);
        assert_relative_eq!(angle(&Vector::new(1., 1.), &origin), -3. * PI / 4.);
    }
}
