use glam::Vec2;

/// Mask cell coordinates (unsigned integers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskCoord {
    pub x: u32,
    pub y: u32,
}

impl MaskCoord {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Check if a map position lies inside `[0, width) x [0, height)`
pub fn is_within_map(position: Vec2, map_size: Vec2) -> bool {
    position.x >= 0.0 && position.y >= 0.0 && position.x < map_size.x && position.y < map_size.y
}

/// Convert a map position to a mask cell by linear scaling (lossy).
///
/// Float rounding right below the upper map edge can land exactly on the
/// mask size, so the index is clamped into the last cell.
pub fn map_to_mask(position: Vec2, map_size: Vec2, mask_width: u32, mask_height: u32) -> MaskCoord {
    let mask_x = (position.x / map_size.x * mask_width as f32) as u32;
    let mask_y = (position.y / map_size.y * mask_height as f32) as u32;
    MaskCoord::new(
        mask_x.min(mask_width.saturating_sub(1)),
        mask_y.min(mask_height.saturating_sub(1)),
    )
}

/// Convert a map position to pixel space for rendering at `resolution` pixels per unit
pub fn map_to_pixel(position: Vec2, resolution: u32) -> (i64, i64) {
    let scaled = position * resolution as f32;
    (scaled.x as i64, scaled.y as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_to_mask_scaling() {
        let map_size = Vec2::new(100.0, 50.0);
        assert_eq!(map_to_mask(Vec2::new(0.0, 0.0), map_size, 800, 400), MaskCoord::new(0, 0));
        assert_eq!(map_to_mask(Vec2::new(50.0, 25.0), map_size, 800, 400), MaskCoord::new(400, 200));
        assert_eq!(map_to_mask(Vec2::new(10.9, 0.5), map_size, 100, 50), MaskCoord::new(10, 0));
    }

    #[test]
    fn test_map_to_mask_upper_edge_stays_in_bounds() {
        let map_size = Vec2::new(10.0, 10.0);
        let edge = Vec2::new(f32::from_bits(10.0_f32.to_bits() - 1), 9.999_999);
        let coord = map_to_mask(edge, map_size, 7, 7);
        assert!(coord.x < 7 && coord.y < 7);
    }

    #[test]
    fn test_is_within_map() {
        let map_size = Vec2::new(10.0, 10.0);
        assert!(is_within_map(Vec2::new(0.0, 9.9), map_size));
        assert!(!is_within_map(Vec2::new(10.0, 5.0), map_size));
        assert!(!is_within_map(Vec2::new(-0.1, 5.0), map_size));
    }

    #[test]
    fn test_map_to_pixel() {
        assert_eq!(map_to_pixel(Vec2::new(2.5, 3.0), 8), (20, 24));
    }
}
