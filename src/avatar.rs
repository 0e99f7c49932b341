// Eye tracking for the header avatar: the eyes slide towards the pointer,
// never further than MAX_EYE_OFFSET from their resting spot.

use wasm_bindgen::prelude::*;

pub const MAX_EYE_OFFSET: f64 = 10.0;
const DISTANCE_DAMPING: f64 = 10.0;

pub fn eye_offset(pointer: [f64; 2], center: [f64; 2]) -> [f64; 2] {
    let dx = pointer[0] - center[0];
    let dy = pointer[1] - center[1];
    let angle = dy.atan2(dx);
    let distance = (dx.hypot(dy) / DISTANCE_DAMPING).min(MAX_EYE_OFFSET);
    [angle.cos() * distance, angle.sin() * distance]
}

// Returns [x, y] for the eyes group translate()
#[wasm_bindgen]
pub fn avatar_eye_offset(pointer_x: f64, pointer_y: f64, center_x: f64, center_y: f64) -> Vec<f64> {
    eye_offset([pointer_x, pointer_y], [center_x, center_y]).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: [f64; 2]) -> f64 {
        v[0].hypot(v[1])
    }

    #[test]
    fn follows_pointer_direction() {
        let offset = eye_offset([150.0, 100.0], [100.0, 100.0]);
        assert!((offset[0] - 5.0).abs() < 1e-9);
        assert!(offset[1].abs() < 1e-9);
    }

    #[test]
    fn capped_far_from_center() {
        let offset = eye_offset([-900.0, 700.0], [100.0, 100.0]);
        assert!((length(offset) - MAX_EYE_OFFSET).abs() < 1e-9);
        assert!(offset[0] < 0.0 && offset[1] > 0.0);
    }

    #[test]
    fn resting_at_center() {
        assert_eq!(eye_offset([100.0, 100.0], [100.0, 100.0]), [0.0, 0.0]);
    }
}
