use crate::error::TileError;
use crate::models::ResolvedTile;
use crate::traits::TileSink;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use serde::Serialize;
use std::io::Write;

fn header(title: &str) -> Cell {
    Cell::new(title)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Center)
}

/// Collects tiles into a comfy table, printed on `finish` with a warnings
/// section for the inputs that failed.
pub struct TableSink<W: Write> {
    out: W,
    table: Table,
    resolved: usize,
    warnings: Vec<String>,
}

impl<W: Write> TableSink<W> {
    pub fn new(out: W) -> Self {
        let mut table = Table::new();
        table
            .set_header(vec![
                header("Input"),
                header("Quadkey"),
                header("Zoom"),
                header("Pixel box (x, y, size)"),
                header("South-west (lon , lat)"),
                header("North-east (lon , lat)"),
            ])
            .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

        TableSink {
            out,
            table,
            resolved: 0,
            warnings: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TileSink for TableSink<W> {
    fn accept(&mut self, input: &str, tile: &ResolvedTile) -> anyhow::Result<()> {
        let b = &tile.pixel_box;
        self.table.add_row(vec![
            Cell::new(input),
            Cell::new(tile.quadkey.as_str()),
            Cell::new(tile.zoom).set_alignment(CellAlignment::Right),
            Cell::new(format!("{}, {}, {}", b.x, b.y, b.width)),
            Cell::new(tile.geo_box.south_west.to_string()),
            Cell::new(tile.geo_box.north_east.to_string()),
        ]);
        self.resolved += 1;
        Ok(())
    }

    fn reject(&mut self, input: &str, error: &TileError) -> anyhow::Result<()> {
        self.warnings.push(format!("  ⚠️ {}: {}", input, error));
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        if self.resolved > 0 {
            writeln!(self.out, "{}", self.table)?;
        }
        writeln!(
            self.out,
            "\n📦 Resolved: {}, failed: {}",
            self.resolved,
            self.warnings.len()
        )?;

        if !self.warnings.is_empty() {
            writeln!(self.out, "\nWarnings:")?;
            for warning in &self.warnings {
                writeln!(self.out, "{}", warning)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonEntry {
    Resolved { input: String, tile: ResolvedTile },
    Failed { input: String, error: String },
}

/// Buffers tiles and writes them as one pretty-printed JSON array.
pub struct JsonSink<W: Write> {
    out: W,
    entries: Vec<JsonEntry>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        JsonSink {
            out,
            entries: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TileSink for JsonSink<W> {
    fn accept(&mut self, input: &str, tile: &ResolvedTile) -> anyhow::Result<()> {
        self.entries.push(JsonEntry::Resolved {
            input: input.to_string(),
            tile: tile.clone(),
        });
        Ok(())
    }

    fn reject(&mut self, input: &str, error: &TileError) -> anyhow::Result<()> {
        self.entries.push(JsonEntry::Failed {
            input: input.to_string(),
            error: error.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.entries)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
