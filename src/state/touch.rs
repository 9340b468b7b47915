// Touch point geometry used by the gesture mapper

/// A single touch in client-space pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Returns (midpoint, distance) for exactly two touches.
pub fn two_finger_geometry(touches: &[TouchPoint]) -> Option<(TouchPoint, f64)> {
    match touches {
        [a, b] => Some((a.midpoint(*b), a.distance(*b))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = TouchPoint::new(0.0, 0.0);
        let b = TouchPoint::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn geometry_needs_exactly_two_touches() {
        let a = TouchPoint::new(10.0, 20.0);
        let b = TouchPoint::new(30.0, 20.0);
        assert!(two_finger_geometry(&[a]).is_none());
        assert!(two_finger_geometry(&[a, b, a]).is_none());
        let (mid, dist) = two_finger_geometry(&[a, b]).unwrap();
        assert_eq!(mid, TouchPoint::new(20.0, 20.0));
        assert_eq!(dist, 20.0);
    }
}
