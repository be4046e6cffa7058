//! Trellis CLI - half-edge mesh inspection tool.
//!
//! Usage: trellis [OPTIONS] <COMMAND>
//!
//! Run `trellis --help` for available commands.

use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};

use trellis::edit;
use trellis::error::MeshError;
use trellis::mesh::{
    make_cube, make_square, to_face_vertex, HalfEdgeId, HalfEdgeMesh, MeshOptions, PolygonId,
    Validity, DEFAULT_MAX_CYCLE_LENGTH,
};

#[derive(Parser)]
#[command(name = "trellis")]
#[command(author, version, about = "Half-edge mesh inspection CLI", long_about = None)]
struct Cli {
    /// Maximum number of steps taken when walking a corner or polygon cycle
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_CYCLE_LENGTH)]
    max_cycle: usize,

    /// Report validity at the renderable level (no two-sided polygons)
    #[arg(long, global = true)]
    renderable: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh information
    Info {
        /// Built-in mesh to inspect
        #[arg(short, long, value_enum, default_value = "cube")]
        shape: Shape,
    },

    /// Insert a strip of polygons along sides of one polygon
    SplitEdges {
        /// Built-in mesh to edit
        #[arg(short, long, value_enum, default_value = "cube")]
        shape: Shape,

        /// Polygon whose sides are split
        #[arg(short, long, default_value = "0")]
        polygon: usize,

        /// Positions of the sides along the polygon boundary (comma separated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        edges: Vec<usize>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Shape {
    /// Two-sided unit square
    Square,
    /// Unit cube
    Cube,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = MeshOptions::new().with_max_cycle_length(cli.max_cycle);
    let level = if cli.renderable {
        Validity::Renderable
    } else {
        Validity::Topological
    };

    match cli.command {
        Commands::Info { shape } => {
            let mesh = load_shape(shape, options);
            print_report(&mesh, level);
        }

        Commands::SplitEdges {
            shape,
            polygon,
            edges,
        } => {
            cmd_split_edges(shape, options, polygon, &edges, level)?;
        }
    }

    Ok(())
}

fn load_shape(shape: Shape, options: MeshOptions) -> HalfEdgeMesh {
    let mut mesh: HalfEdgeMesh = match shape {
        Shape::Square => make_square(),
        Shape::Cube => make_cube(),
    };
    mesh.set_options(options);
    mesh
}

fn cmd_split_edges(
    shape: Shape,
    options: MeshOptions,
    polygon: usize,
    positions: &[usize],
    level: Validity,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut mesh = load_shape(shape, options);

    if polygon >= mesh.num_polygons() {
        return Err(MeshError::invalid_param(
            "polygon",
            polygon,
            "no such polygon in the mesh",
        )
        .into());
    }
    let boundary: Vec<HalfEdgeId> = mesh.polygon_halfedges(PolygonId::new(polygon)).collect();
    let edges = positions
        .iter()
        .map(|&i| {
            boundary.get(i).copied().ok_or_else(|| {
                MeshError::invalid_param(
                    "edges",
                    i,
                    "past the end of the polygon boundary",
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    println!(
        "Before: {} corners, {} polygons, {} half-edges",
        mesh.num_corners(),
        mesh.num_polygons(),
        mesh.num_halfedges()
    );

    let start = Instant::now();
    let strip = edit::split_edges(&mut mesh, &edges)?;
    let elapsed = start.elapsed();

    let ids: Vec<usize> = strip.iter().map(|p| p.index()).collect();
    println!("Inserted {} polygons {:?} in {:.2?}", strip.len(), ids, elapsed);
    print_report(&mesh, level);

    Ok(())
}

fn print_report(mesh: &HalfEdgeMesh, level: Validity) {
    println!("Corners: {}", mesh.num_corners());
    println!("Polygons: {}", mesh.num_polygons());
    println!("Half-edges: {}", mesh.num_halfedges());
    println!("Edges: {}", mesh.num_edges());

    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }

    let label = match level {
        Validity::Topological => "topological",
        Validity::Renderable => "renderable",
    };
    match mesh.validate(level) {
        Ok(()) => println!("Validity ({}): ok", label),
        Err(e) => println!("Validity ({}): {}", label, e),
    }

    let (_, polygons) = to_face_vertex(mesh);
    println!("\nPolygons:");
    for (pi, corners) in polygons.iter().enumerate() {
        println!("  {:>3}: {:?}", pi, corners);
    }
}
