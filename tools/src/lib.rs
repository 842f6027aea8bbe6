//! Inspection and editing tools for scn scene files.
//!
//! This crate provides the pieces behind the `scn-tools` binary:
//!
//! - Summarize a scene's size table and layers
//! - Print decoded layers run by run with their display colors
//! - Probe which layer counts frame a buffer exactly
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see what the codec is doing.

use std::num::NonZeroUsize;

use codec::{
    collapse, decode_scene_from_frame, decode_scene_with, display_color, CodecResult,
    DecodeOptions, Scene,
};
use serde::Serialize;

/// Summary of one decoded layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerSummary {
    pub index: usize,
    pub id: u32,
    pub z: u32,
    /// Payload size from the size table.
    pub size: usize,
    pub runs: usize,
    pub tiles: usize,
}

/// Structure of a scene buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub total_bytes: usize,
    pub sizes: Vec<u32>,
    pub layers: Vec<LayerSummary>,
    pub trailing_bytes: usize,
}

/// Decodes `bytes` and summarizes its framing and layers.
pub fn inspect_scene(
    bytes: &[u8],
    layer_count: usize,
    options: &DecodeOptions,
) -> CodecResult<InspectReport> {
    let frame = wire::decode_scene_frame(bytes, layer_count, &options.wire_limits)?;
    let scene = decode_scene_from_frame(&frame, options)?;

    let layers = frame
        .layers
        .iter()
        .zip(&scene.layers)
        .enumerate()
        .map(|(index, (framed, layer))| LayerSummary {
            index,
            id: layer.id,
            z: layer.z,
            size: framed.size(),
            runs: framed.run_count(),
            tiles: layer.tiles.len(),
        })
        .collect();

    Ok(InspectReport {
        total_bytes: bytes.len(),
        sizes: frame.sizes.clone(),
        layers,
        trailing_bytes: frame.trailing_bytes,
    })
}

/// Returns every layer count in `1..=max_layers` that decodes `bytes` with no
/// bytes left over.
///
/// The file format does not record its layer count; this only narrows down
/// candidates for a human to choose from.
pub fn probe_layer_counts(bytes: &[u8], max_layers: usize) -> Vec<usize> {
    let options = DecodeOptions::strict();
    (1..=max_layers)
        .filter(|&count| decode_scene_with(bytes, count, &options).is_ok())
        .collect()
}

/// Renders a scene run by run, with each run's display color.
pub fn format_decode_pretty(scene: &Scene, columns: Option<NonZeroUsize>) -> String {
    let mut out = String::new();
    for (index, layer) in scene.layers.iter().enumerate() {
        out.push_str(&format!(
            "layer {index}: id {} z {} ({} tiles)\n",
            layer.id,
            layer.z,
            layer.tiles.len()
        ));
        if let Some(columns) = columns {
            out.push_str(&format!(
                "  grid: {columns} columns x {} rows\n",
                layer.row_count(columns)
            ));
        }
        for (run_index, run) in collapse(&layer.tiles).iter().enumerate() {
            out.push_str(&format!(
                "  run {run_index}: {} x{} #{}\n",
                run.tile,
                run.count,
                display_color(&run.tile)
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use codec::{encode_scene, Layer, Tile};

    fn sample_bytes() -> Vec<u8> {
        let scene = Scene::new(vec![
            Layer::with_tiles(1, 0, vec![Tile::new(0, 1, 1); 6]),
            Layer::with_tiles(2, 1, vec![Tile::new(0, 1, 2), Tile::new(0, 1, 3)]),
        ]);
        encode_scene(&scene).unwrap()
    }

    #[test]
    fn inspect_reports_layers() {
        let report = inspect_scene(&sample_bytes(), 2, &DecodeOptions::default()).unwrap();
        assert_eq!(report.sizes, vec![16, 24]);
        assert_eq!(report.trailing_bytes, 0);
        assert_eq!(report.total_bytes, 8 + 16 + 24);
        assert_eq!(
            report.layers[1],
            LayerSummary {
                index: 1,
                id: 2,
                z: 1,
                size: 24,
                runs: 2,
                tiles: 2,
            }
        );
    }

    #[test]
    fn probe_finds_exact_count() {
        assert_eq!(probe_layer_counts(&sample_bytes(), 4), vec![2]);
    }

    #[test]
    fn probe_of_empty_buffer_finds_nothing() {
        assert!(probe_layer_counts(&[], 4).is_empty());
    }

    #[test]
    fn pretty_output_lists_runs_and_colors() {
        let scene = Scene::new(vec![Layer::with_tiles(7, 3, vec![Tile::new(1, 2, 3); 5])]);
        let text = format_decode_pretty(&scene, NonZeroUsize::new(2));
        assert!(text.contains("layer 0: id 7 z 3 (5 tiles)"));
        assert!(text.contains("grid: 2 columns x 3 rows"));
        assert!(text.contains("run 0: 1,2,3 x5 #7d15"));
    }

    #[test]
    fn pretty_output_is_line_per_item() {
        let scene = Scene::new(vec![
            Layer::with_tiles(1, 0, vec![Tile::new(0, 0, 0), Tile::new(0, 1, 1)]),
            Layer::new(2, 1),
        ]);
        let text = format_decode_pretty(&scene, None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "layer 0: id 1 z 0 (2 tiles)",
                "  run 0: 0,0,0 x1 #4c95",
                "  run 1: 0,1,1 x1 #5095",
                "layer 1: id 2 z 1 (0 tiles)",
            ]
        );
        assert!(!text.contains("grid"));
    }

    #[test]
    fn strict_inspect_rejects_trailing_bytes() {
        let mut bytes = sample_bytes();
        bytes.push(0);
        let report = inspect_scene(&bytes, 2, &DecodeOptions::default()).unwrap();
        assert_eq!(report.trailing_bytes, 1);
        assert!(inspect_scene(&bytes, 2, &DecodeOptions::strict()).is_err());
    }
}
