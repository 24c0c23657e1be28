pub mod coordinates;

use crate::errors::{NodeMapError, NodeMapResult};
use coordinates::{is_within_map, map_to_mask};
use glam::Vec2;
use image::{GrayImage, RgbaImage};
use validator::Validate;

/// Anything that can answer "is this mask cell buildable?"
pub trait MaskSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Query a single cell. Callers guarantee `x < width()` and `y < height()`.
    fn is_buildable_cell(&self, x: u32, y: u32) -> bool;
}

/// Row-major boolean grid of buildable cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildableGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl BuildableGrid {
    /// A grid where every cell has the same state
    pub fn filled(width: u32, height: u32, buildable: bool) -> Self {
        Self {
            width,
            height,
            cells: vec![buildable; width as usize * height as usize],
        }
    }

    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self { width, height, cells }
    }

    /// Cells at or above `threshold` are buildable, everything below is water
    pub fn from_heights(heights: &HeightMap, threshold: f32) -> Self {
        Self::from_fn(heights.width, heights.height, |x, y| {
            heights.get(x, y).is_some_and(|h| h >= threshold)
        })
    }

    /// Pixels with a luma value at or above `threshold` are buildable
    pub fn from_luma(image: &GrayImage, threshold: u8) -> Self {
        Self::from_fn(image.width(), image.height(), |x, y| {
            image.get_pixel(x, y).0[0] >= threshold
        })
    }

    /// Snapshot any mask source into a plain grid
    pub fn from_source<S: MaskSource>(source: &S) -> Self {
        Self::from_fn(source.width(), source.height(), |x, y| {
            source.is_buildable_cell(x, y)
        })
    }

    pub fn buildable_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl MaskSource for BuildableGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn is_buildable_cell(&self, x: u32, y: u32) -> bool {
        self.cells[y as usize * self.width as usize + x as usize]
    }
}

impl<S: MaskSource + ?Sized> MaskSource for &S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn is_buildable_cell(&self, x: u32, y: u32) -> bool {
        (**self).is_buildable_cell(x, y)
    }
}

/// Fully transparent pixels are unbuildable
impl MaskSource for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn is_buildable_cell(&self, x: u32, y: u32) -> bool {
        self.get_pixel(x, y).0[3] != 0
    }
}

/// Heightmap data the mask is derived from
#[derive(Debug, Clone, Validate)]
pub struct HeightMap {
    #[validate(range(min = 1, max = 16384))]
    pub width: u32,
    #[validate(range(min = 1, max = 16384))]
    pub height: u32,
    pub heights: Vec<f32>, // Flattened 2D array (row-major)
}

impl HeightMap {
    /// Create a new height map with validation
    pub fn new(width: u32, height: u32, heights: Vec<f32>) -> NodeMapResult<Self> {
        let expected_size = width as usize * height as usize;
        if heights.len() != expected_size {
            return Err(NodeMapError::InvalidMaskData {
                reason: format!(
                    "Heights array size {} does not match dimensions {}x{} (expected {})",
                    heights.len(),
                    width,
                    height,
                    expected_size
                ),
            });
        }

        let map = Self {
            width,
            height,
            heights,
        };

        map.validate().map_err(|_| NodeMapError::InvalidMaskData {
            reason: "Height map validation failed".to_string(),
        })?;

        Ok(map)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.heights
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Rescale all samples into [0, 1]; a flat map becomes all zeros
    pub fn normalized(mut self) -> Self {
        let (min, max) = self
            .heights
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &h| (lo.min(h), hi.max(h)));
        let span = max - min;
        for h in &mut self.heights {
            *h = if span > f32::EPSILON { (*h - min) / span } else { 0.0 };
        }
        self
    }
}

/// A mask source bound to the map it covers.
pub struct SpatialMask<S> {
    source: S,
    map_size: Vec2,
}

impl<S: MaskSource> SpatialMask<S> {
    pub fn new(source: S, map_width: u32, map_height: u32) -> Self {
        Self {
            source,
            map_size: Vec2::new(map_width as f32, map_height as f32),
        }
    }

    /// Whether a node may be placed at `position` (map space).
    ///
    /// # Panics
    /// If `position` lies outside the map. Placement samples inside the map
    /// by construction, so this only fires on a coordinate bug.
    ///
    /// A source with no cells has no buildable area.
    pub fn is_buildable(&self, position: Vec2) -> bool {
        assert!(
            is_within_map(position, self.map_size),
            "mask lookup out of bounds: {position} outside map {}",
            self.map_size
        );
        if self.source.width() == 0 || self.source.height() == 0 {
            return false;
        }
        let cell = map_to_mask(position, self.map_size, self.source.width(), self.source.height());
        self.source.is_buildable_cell(cell.x, cell.y)
    }
}
