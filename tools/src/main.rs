use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec::{decode_scene_with, encode_scene, replace_tile, DecodeOptions, Scene, Tile};
use scn_tools::{format_decode_pretty, inspect_scene, probe_layer_counts, InspectReport};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scn-tools", version, about = "scn scene inspection and editing tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect scene structure and sizes.
    Inspect {
        /// Path to the scene file.
        scene_file: PathBuf,
        /// Number of layers in the scene.
        #[arg(long)]
        layers: usize,
        /// Fail on bytes after the last layer instead of warning.
        #[arg(long)]
        strict: bool,
    },
    /// Decode a scene into JSON or a run listing.
    Decode {
        /// Path to the scene file.
        scene_file: PathBuf,
        /// Number of layers in the scene.
        #[arg(long)]
        layers: usize,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
        /// Grid width used to report row counts in pretty output.
        #[arg(long)]
        columns: Option<NonZeroUsize>,
    },
    /// Replace one tile and write the re-encoded scene.
    Paint {
        /// Path to the scene file.
        scene_file: PathBuf,
        /// Number of layers in the scene.
        #[arg(long)]
        layers: usize,
        /// Layer index to edit.
        #[arg(long)]
        layer: usize,
        /// Flat tile index within the layer.
        #[arg(long)]
        index: usize,
        /// Replacement tile as `autotile,tileset,tile`.
        #[arg(long, allow_hyphen_values = true)]
        tile: Tile,
        /// Output path; defaults to overwriting the input.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Encode a JSON scene (as produced by `decode`) into scene bytes.
    Encode {
        /// Path to the JSON scene.
        json_file: PathBuf,
        /// Output path for the encoded scene.
        #[arg(long)]
        out: PathBuf,
    },
    /// List layer counts that frame a scene file exactly.
    Probe {
        /// Path to the scene file.
        scene_file: PathBuf,
        /// Largest layer count to try.
        #[arg(long, default_value_t = 16)]
        max_layers: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Inspect {
            scene_file,
            layers,
            strict,
        } => {
            let bytes = read_scene_bytes(&scene_file)?;
            let report = inspect_scene(&bytes, layers, &decode_options(strict))
                .with_context(|| format!("inspect scene {}", scene_file.display()))?;
            print_inspect_report(&report);
        }
        Command::Decode {
            scene_file,
            layers,
            format,
            columns,
        } => {
            let scene = load_scene(&scene_file, layers)?;
            match format {
                DecodeFormat::Json => {
                    let json = serde_json::to_string_pretty(&scene).context("serialize json")?;
                    println!("{json}");
                }
                DecodeFormat::Pretty => {
                    print!("{}", format_decode_pretty(&scene, columns));
                }
            }
        }
        Command::Paint {
            scene_file,
            layers,
            layer,
            index,
            tile,
            out,
        } => {
            let mut scene = load_scene(&scene_file, layers)?;
            let previous = replace_tile(&mut scene, layer, index, tile)
                .with_context(|| format!("paint layer {layer} tile {index}"))?;
            info!(layer, index, %previous, %tile, "tile replaced");
            let out = out.unwrap_or(scene_file);
            write_scene(&out, &scene)?;
            println!("{previous} -> {tile} ({})", out.display());
        }
        Command::Encode { json_file, out } => {
            let contents = fs::read_to_string(&json_file)
                .with_context(|| format!("read json {}", json_file.display()))?;
            let scene: Scene = serde_json::from_str(&contents).context("parse scene json")?;
            write_scene(&out, &scene)?;
            println!("{} layers -> {}", scene.layer_count(), out.display());
        }
        Command::Probe {
            scene_file,
            max_layers,
        } => {
            let bytes = read_scene_bytes(&scene_file)?;
            let counts = probe_layer_counts(&bytes, max_layers);
            if counts.is_empty() {
                println!("no layer count in 1..={max_layers} frames this file exactly");
            }
            for count in counts {
                println!("{count}");
            }
        }
    }
    Ok(())
}

fn decode_options(strict: bool) -> DecodeOptions {
    if strict {
        DecodeOptions::strict()
    } else {
        DecodeOptions::default()
    }
}

fn read_scene_bytes(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).with_context(|| format!("read scene {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read scene");
    Ok(bytes)
}

fn load_scene(path: &Path, layers: usize) -> Result<Scene> {
    let bytes = read_scene_bytes(path)?;
    decode_scene_with(&bytes, layers, &DecodeOptions::default())
        .with_context(|| format!("decode scene {}", path.display()))
}

fn write_scene(path: &Path, scene: &Scene) -> Result<()> {
    let bytes = encode_scene(scene).context("encode scene")?;
    fs::write(path, &bytes).with_context(|| format!("write scene {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote scene");
    Ok(())
}

fn print_inspect_report(report: &InspectReport) {
    println!(
        "total: {} bytes, {} layers, {} trailing bytes",
        report.total_bytes,
        report.layers.len(),
        report.trailing_bytes
    );
    println!("size table: {:?}", report.sizes);
    println!("layers:");
    for layer in &report.layers {
        println!(
            "  [{}] id {} z {}: {} runs, {} tiles ({} bytes)",
            layer.index, layer.id, layer.z, layer.runs, layer.tiles, layer.size
        );
    }
}
