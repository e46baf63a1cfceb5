use glam::Vec2;

/// Where the ball rests between attempts, in field percent.
pub const FIELD_CENTER: Vec2 = Vec2::new(50.0, 50.0);

/// Aiming only counts strictly right of this x (percent): the attacking third.
pub const DEFAULT_AIM_MIN_X: f32 = 66.0;

/// The field's on-screen rectangle in client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl FieldRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// A rect we can divide by. Zero-sized before the first layout pass.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Map a client-pixel pointer position into field percent (0..100 on each axis).
    /// Positions outside the rect map outside 0..100; they are not clamped.
    pub fn to_percent(&self, pointer: Vec2) -> Option<Vec2> {
        if !self.is_usable() {
            return None;
        }
        Some(Vec2::new(
            (pointer.x - self.left) / self.width * 100.0,
            (pointer.y - self.top) / self.height * 100.0,
        ))
    }
}

/// True when a field point lies in the region a striker may aim at.
#[inline]
pub fn in_attacking_third(point: Vec2, min_x: f32) -> bool {
    point.x > min_x
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn maps_corners_and_center() {
        let rect = FieldRect::new(100.0, 40.0, 600.0, 192.0);
        assert_eq!(rect.to_percent(Vec2::new(100.0, 40.0)), Some(Vec2::ZERO));
        assert_eq!(rect.to_percent(Vec2::new(700.0, 232.0)), Some(Vec2::new(100.0, 100.0)));
        assert_eq!(rect.to_percent(Vec2::new(400.0, 136.0)), Some(FIELD_CENTER));
    }

    #[test]
    fn degenerate_rect_maps_nothing() {
        assert_eq!(FieldRect::default().to_percent(Vec2::new(10.0, 10.0)), None);
        assert_eq!(FieldRect::new(0.0, 0.0, 300.0, f32::NAN).to_percent(Vec2::ZERO), None);
    }

    #[test]
    fn outside_pointer_is_not_clamped() {
        let rect = FieldRect::new(0.0, 0.0, 200.0, 100.0);
        let p = rect.to_percent(Vec2::new(250.0, -10.0)).unwrap();
        assert_eq!(p, Vec2::new(125.0, -10.0));
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!in_attacking_third(Vec2::new(66.0, 50.0), DEFAULT_AIM_MIN_X));
        assert!(in_attacking_third(Vec2::new(66.01, 50.0), DEFAULT_AIM_MIN_X));
        assert!(!in_attacking_third(Vec2::new(50.0, 10.0), DEFAULT_AIM_MIN_X));
    }

    proptest! {
        /// Any pointer inside the rect lands inside 0..=100 on both axes
        #[test]
        fn prop_inside_pointer_maps_into_percent_range(
            fx in 0.0f32..=1.0f32,
            fy in 0.0f32..=1.0f32,
            left in -500.0f32..500.0f32,
            top in -500.0f32..500.0f32,
            width in 1.0f32..2000.0f32,
            height in 1.0f32..2000.0f32,
        ) {
            let rect = FieldRect::new(left, top, width, height);
            let pointer = Vec2::new(left + fx * width, top + fy * height);
            let p = rect.to_percent(pointer).unwrap();
            prop_assert!(p.x >= -0.01 && p.x <= 100.01);
            prop_assert!(p.y >= -0.01 && p.y <= 100.01);
        }
    }
}
