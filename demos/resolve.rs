use clap::{Parser, ValueEnum};
use geo_polygon_soup::geojson_io::{polygons_to_geojson, rings_from_geojson};
use geo_polygon_soup::reader::PolygonReader;
use geo_polygon_soup::SoupResolver;
use geojson::GeoJson;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InputFormat {
    /// One polygon per line: `x0 y0 x1 y1 ...`
    Text,
    /// Rings of any (Multi)Polygon or (Multi)LineString features
    Geojson,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file with the polygon soup
    #[arg(short, long)]
    input: PathBuf,

    /// Output GeoJSON file (Polygons with holes)
    #[arg(short, long)]
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = InputFormat::Text)]
    format: InputFormat,

    /// Keep parent links between rings that wind the same way
    #[arg(long, default_value_t = false)]
    ignore_winding: bool,

    /// Print the role assigned to every input ring
    #[arg(long, default_value_t = false)]
    roles: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Read Input
    println!("Reading input from {:?}", args.input);
    let reader = BufReader::new(File::open(&args.input)?);
    let rings = match args.format {
        InputFormat::Text => PolygonReader::new().read(reader)?,
        InputFormat::Geojson => {
            let geojson: GeoJson = serde_json::from_reader(reader)?;
            rings_from_geojson(geojson)?
        }
    };

    let mut resolver = SoupResolver::new();
    resolver.orientation_guard = !args.ignore_winding;

    println!("Loaded {} rings. Resolving nesting...", rings.len());

    if args.roles {
        for (id, role) in resolver.classify(&rings)?.iter().enumerate() {
            let kind = if role.is_outer() { "outer" } else { "hole" };
            println!("  ring {}: {} ({:?})", id, kind, role);
        }
    }

    let polygons = resolver.resolve(rings)?;
    let holes: usize = polygons.iter().map(|p| p.interiors().len()).sum();
    println!("Found {} polygons with {} holes.", polygons.len(), holes);

    // Write Output
    let file = File::create(&args.output)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &polygons_to_geojson(&polygons))?;

    println!("Wrote output to {:?}", args.output);

    Ok(())
}
