use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use serde_json::{json, Value};

use game_geometry::geometries::shape::{point_from_value, point_to_value};
use game_geometry::geometries::{collide_with, intersection, Point, Shape};
use game_geometry::mesh::{voronoi_with, Triangulation};
use game_geometry::{GeometryConfig, GeometryError, Result};

#[derive(Parser)]
#[command(name = "game-geometry")]
#[command(about = "Collision, intersection and Delaunay/Voronoi queries over JSON shape files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON file with tolerance settings (epsilon, hash_precision)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Delaunay-triangulate an array of {x, y} points
    Triangulate {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Voronoi cells for an array of {x, y} points
    Voronoi {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Test two shapes, given as a JSON array, for collision
    Collide {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Intersect a point pair with a list of shapes: {"pair": ..., "shapes": [...]}
    Intersect {
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => serde_json::from_value(read_json(path)?)
            .with_context(|| format!("invalid config in {}", path.display()))?,
        None => GeometryConfig::default(),
    };
    info!("Starting game-geometry v{} (epsilon = {})", game_geometry::VERSION, config.epsilon);

    let output = match cli.command {
        Commands::Triangulate { input } => triangulate(&read_json(&input)?, &config)?,
        Commands::Voronoi { input } => voronoi(&read_json(&input)?, &config)?,
        Commands::Collide { input } => collide(&read_json(&input)?, &config)?,
        Commands::Intersect { input } => intersect(&read_json(&input)?, &config)?,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn points_from_value(value: &Value) -> std::result::Result<Vec<Point>, GeometryError> {
    value
        .as_array()
        .ok_or_else(|| GeometryError::unrecognized(value))?
        .iter()
        .map(point_from_value)
        .collect()
}

fn triangulate(input: &Value, config: &GeometryConfig) -> Result<Value> {
    let points = points_from_value(input)?;
    let triangulation = Triangulation::with_config(&points, config);
    info!("{} triangles", triangulation.triangles.len());
    Ok(Value::Array(
        triangulation
            .triangles
            .into_iter()
            .map(|t| Shape::Triangle(t).to_value())
            .collect(),
    ))
}

fn voronoi(input: &Value, config: &GeometryConfig) -> Result<Value> {
    let points = points_from_value(input)?;
    let cells = voronoi_with(&points, config);
    Ok(Value::Array(
        cells
            .into_iter()
            .map(|cell| {
                json!({
                    "site": point_to_value(cell.site),
                    "polygon": cell.polygon.map(|polygon| Shape::Polygon(polygon).to_value()),
                })
            })
            .collect(),
    ))
}

fn collide(input: &Value, config: &GeometryConfig) -> Result<Value> {
    let shapes = input
        .as_array()
        .filter(|shapes| shapes.len() == 2)
        .ok_or("collide expects a JSON array of exactly two shapes")?;
    let a = Shape::from_value(&shapes[0])?;
    let b = Shape::from_value(&shapes[1])?;
    let result = collide_with(&a, &b, Point::zeros(), Point::zeros(), config);
    info!("{} vs {}: {}", a.kind().name(), b.kind().name(), result);
    Ok(json!({ "collide": result }))
}

fn intersect(input: &Value, config: &GeometryConfig) -> Result<Value> {
    let pair_value = input.get("pair").ok_or("intersect expects a \"pair\" field")?;
    let pair = match Shape::from_value(pair_value)? {
        Shape::Pair(pair) => pair,
        _ => return Err(GeometryError::unrecognized(pair_value).into()),
    };
    let shapes = input
        .get("shapes")
        .and_then(Value::as_array)
        .ok_or("intersect expects a \"shapes\" array")?
        .iter()
        .map(Shape::from_value)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let points = intersection::intersections_with(&pair, &shapes, config);
    Ok(Value::Array(points.into_iter().map(point_to_value).collect()))
}
