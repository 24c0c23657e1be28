use nodemap::errors::{NodeMapError, NodeMapResult};
use nodemap::map::HeightMap;
use noise::{MultiFractal, NoiseFn, Perlin, RidgedMulti};

/// Height field algorithms
#[derive(Debug, Clone)]
pub enum HeightAlgorithm {
    Perlin { frequency: f64, octaves: u32 },
    Ridged { frequency: f64, octaves: u32 },
}

/// Synthesises the height map the spatial mask is thresholded from
#[derive(Debug, Clone)]
pub struct HeightMapGenerator {
    pub seed: u32,
    pub algorithm: HeightAlgorithm,
}

impl HeightMapGenerator {
    pub fn new(seed: u32, algorithm: HeightAlgorithm) -> Self {
        Self { seed, algorithm }
    }

    /// Look up a named preset
    pub fn preset(name: &str, seed: u32) -> NodeMapResult<Self> {
        let algorithm = match name {
            "hills" => HeightAlgorithm::Perlin {
                frequency: 0.01,
                octaves: 4,
            },
            "islands" => HeightAlgorithm::Perlin {
                frequency: 0.02,
                octaves: 5,
            },
            "mountains" => HeightAlgorithm::Ridged {
                frequency: 0.005,
                octaves: 5,
            },
            _ => {
                return Err(NodeMapError::InvalidArgument {
                    reason: format!(
                        "Unknown terrain type: '{name}'. Available presets: hills, islands, mountains"
                    ),
                });
            }
        };
        Ok(Self::new(seed, algorithm))
    }

    /// Generate a `width` x `height` map normalized into [0, 1]
    pub fn generate(&self, width: u32, height: u32) -> NodeMapResult<HeightMap> {
        let mut heights = Vec::with_capacity(width as usize * height as usize);

        match &self.algorithm {
            HeightAlgorithm::Perlin { frequency, octaves } => {
                let perlin = Perlin::new(self.seed);

                for y in 0..height {
                    let world_y = y as f64 * frequency;
                    for x in 0..width {
                        let world_x = x as f64 * frequency;

                        let mut noise_value = 0.0;
                        let mut current_amplitude = 1.0;
                        let mut current_frequency = 1.0;

                        for _ in 0..*octaves {
                            noise_value += perlin
                                .get([world_x * current_frequency, world_y * current_frequency])
                                * current_amplitude;
                            current_amplitude *= 0.5; // Persistence
                            current_frequency *= 2.0; // Lacunarity
                        }

                        heights.push(noise_value as f32);
                    }
                }
            }
            HeightAlgorithm::Ridged { frequency, octaves } => {
                let ridged = RidgedMulti::<Perlin>::new(self.seed)
                    .set_octaves(*octaves as usize)
                    .set_frequency(*frequency);

                for y in 0..height {
                    for x in 0..width {
                        heights.push(ridged.get([x as f64, y as f64]) as f32);
                    }
                }
            }
        }

        Ok(HeightMap::new(width, height, heights)?.normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perlin_height_map_is_normalized() {
        let generator = HeightMapGenerator::preset("islands", 12345).unwrap();
        let map = generator.generate(32, 24).unwrap();

        assert_eq!(map.width, 32);
        assert_eq!(map.height, 24);
        assert_eq!(map.heights.len(), 32 * 24);
        assert!(map.heights.iter().all(|h| (0.0..=1.0).contains(h)));

        let first_height = map.heights[0];
        let has_variation = map.heights.iter().any(|&h| (h - first_height).abs() > 0.1);
        assert!(has_variation, "Perlin noise should create height variation");
    }

    #[test]
    fn test_same_seed_same_heights() {
        let a = HeightMapGenerator::preset("mountains", 7).unwrap().generate(16, 16).unwrap();
        let b = HeightMapGenerator::preset("mountains", 7).unwrap().generate(16, 16).unwrap();
        assert_eq!(a.heights, b.heights);
    }

    #[test]
    fn test_unknown_preset() {
        assert!(HeightMapGenerator::preset("swamp", 1).is_err());
    }
}
