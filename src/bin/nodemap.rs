use clap::Parser;
use nodemap::config::range_types::{HeightThreshold, MaskResolution, TownProbability};
use nodemap::config::{load_config, load_config_from, save_config};
use nodemap::errors::NodeMapResult;
use nodemap::generation::{GenerationConfig, GenerationOutcome, GenerationPipeline};
use nodemap::map::BuildableGrid;
use nodemap::nodes::NodeVariant;
use std::path::PathBuf;

mod nodemap_cli {
    pub mod cli_utils;
    pub mod heightmap;
    pub mod render;
}

use nodemap_cli::cli_utils::*;
use nodemap_cli::heightmap::HeightMapGenerator;
use nodemap_cli::render::render_node_map;

#[derive(Parser, Clone)]
#[command(name = "nodemap")]
#[command(about = "Generate a connected settlement network over a height-masked map")]
struct Args {
    /// Generation config file (TOML); defaults to the user config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective generation config back to the config file
    #[arg(long)]
    save_config: bool,

    /// Random seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,

    /// Number of nodes to place
    #[arg(long)]
    nodes: Option<usize>,

    /// Placement attempt budget
    #[arg(long)]
    cycles: Option<u32>,

    /// Map size in map units (format: WIDTHxHEIGHT)
    #[arg(long)]
    size: Option<String>,

    /// Minimum distance between nodes
    #[arg(long)]
    min_distance: Option<f32>,

    /// Maximum connection distance
    #[arg(long)]
    max_distance: Option<f32>,

    /// Per-node connection bounds as min,max (e.g., "1,3")
    #[arg(long)]
    connections: Option<String>,

    /// Consecutive failed connection attempts tolerated
    #[arg(long)]
    timeout: Option<u32>,

    /// Probability of a node being a town (0.0-1.0)
    #[arg(long)]
    town_probability: Option<f64>,

    /// Heightmap image to use as mask; transparent pixels are unbuildable
    #[arg(long)]
    heightmap: Option<PathBuf>,

    /// Terrain preset for the synthesised heightmap (hills, islands, mountains)
    #[arg(long, default_value = "islands")]
    terrain_type: String,

    /// Mask cells per map unit
    #[arg(long, default_value = "8")]
    resolution: u32,

    /// Normalized height below which the synthesised terrain is unbuildable
    #[arg(long, default_value = "0.4")]
    threshold: f32,

    /// Render the resulting graph to this PNG file
    #[arg(long)]
    render: Option<PathBuf>,
}

impl Args {
    /// Load the base config and apply every flag that was given
    fn generation_config(&self) -> NodeMapResult<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => load_config_from(path)?,
            None => load_config(),
        };

        if let Some(nodes) = self.nodes {
            config.nodes_to_generate = nodes;
        }
        if let Some(cycles) = self.cycles {
            config.max_generation_cycles = cycles;
        }
        if let Some(size) = &self.size {
            (config.map_width, config.map_height) = parse_size(size)?;
        }
        if let Some(min_distance) = self.min_distance {
            config.min_node_distance = min_distance;
        }
        if let Some(max_distance) = self.max_distance {
            config.max_connection_distance = max_distance;
        }
        if let Some(connections) = &self.connections {
            (config.min_node_connections, config.max_node_connections) =
                parse_connection_bounds(connections)?;
        }
        if let Some(timeout) = self.timeout {
            config.connection_attempt_timeout = timeout;
        }
        if let Some(probability) = self.town_probability {
            config.town_probability = TownProbability::new(probability);
        }

        Ok(config)
    }
}

fn build_mask(args: &Args, config: &GenerationConfig, seed: u64) -> NodeMapResult<BuildableGrid> {
    match &args.heightmap {
        Some(path) => {
            let image = image::open(path)?.to_rgba8();
            log::info!(
                "Loaded heightmap mask {} ({}x{})",
                path.display(),
                image.width(),
                image.height()
            );
            Ok(BuildableGrid::from_source(&image))
        }
        None => {
            let resolution = MaskResolution::new(args.resolution).get();
            let threshold = HeightThreshold::new(args.threshold).get();
            let generator = HeightMapGenerator::preset(&args.terrain_type, seed as u32)?;
            let heights = generator.generate(
                config.map_width * resolution,
                config.map_height * resolution,
            )?;
            Ok(BuildableGrid::from_heights(&heights, threshold))
        }
    }
}

fn main() -> NodeMapResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.generation_config()?;
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut pipeline = GenerationPipeline::new(config.clone(), seed)?;

    if args.save_config {
        let path = save_config(&config, args.config.as_deref())?;
        println!("Config saved to: {}", path.display());
    }

    let grid = build_mask(&args, &config, seed)?;
    if grid.buildable_count() == 0 {
        log::warn!("Mask has no buildable area; no nodes can be placed");
    }
    let outcome = pipeline.generate(&grid);

    if let Some(path) = &args.render {
        let resolution = MaskResolution::new(args.resolution).get();
        let image = render_node_map(&outcome.nodes, config.map_width, config.map_height, resolution);
        image.save(path)?;
        println!("Node map rendered to: {}", path.display());
    }

    print_summary(&outcome, seed);
    Ok(())
}

fn print_summary(outcome: &GenerationOutcome, seed: u64) {
    let summary = outcome.summary();

    println!("\nNode map summary (seed {seed}):");
    println!(
        "  Placement: {} of {} nodes in {} cycles ({} rejected by mask, {} by distance)",
        outcome.placement.placed,
        outcome.placement.requested,
        outcome.placement.cycles,
        outcome.placement.rejected_by_mask,
        outcome.placement.rejected_by_distance
    );
    println!(
        "  Connection: {} links, {} nodes connected ({})",
        outcome.connection.connections_made,
        outcome.connection.nodes_connected,
        outcome.connection.outcome
    );
    println!(
        "  Cleanup: {} of {} nodes discarded",
        outcome.cleanup.discarded, outcome.cleanup.generated
    );
    println!(
        "  Final: {} nodes ({} towns, {} villages){}",
        summary.remaining,
        summary.towns,
        summary.villages,
        if summary.degraded { " [degraded]" } else { "" }
    );

    for node in &outcome.nodes {
        let kind = match node.variant {
            NodeVariant::Town => "town",
            NodeVariant::Village => "village",
        };
        log::debug!(
            "    {kind} {} at ({:.1}, {:.1}) -> {:?}",
            node.id,
            node.position.x,
            node.position.y,
            node.connections()
        );
    }
}
