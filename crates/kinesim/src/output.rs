//! Table, CSV and JSON writers for frames and chart series

use crate::config::{OutputConfig, OutputFormat};
use crate::physics::{ChartChannel, ChartPoint, Scalar, SimulationFrame};
use serde::Serialize;
use std::io::{self, Write};

const FRAME_COLUMNS: [&str; 5] = ["time", "x", "y", "vx", "vy"];

/// Write numeric rows under named columns in the configured format.
///
/// JSON output ignores `rows` and serializes `records` instead so field
/// names come from the record type.
fn write_rows<W: Write, T: Serialize>(
    out: &mut W,
    output: &OutputConfig,
    columns: &[&str],
    rows: impl Iterator<Item = Vec<Scalar>>,
    records: &T,
) -> io::Result<()> {
    let precision = output.precision;
    match output.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)
        }
        OutputFormat::Csv => {
            writeln!(out, "{}", columns.join(","))?;
            for row in rows {
                let cells: Vec<String> = row.iter().map(|v| format!("{v:.precision$}")).collect();
                writeln!(out, "{}", cells.join(","))?;
            }
            Ok(())
        }
        OutputFormat::Table => {
            let width = precision + 8;
            let header: Vec<String> = columns.iter().map(|c| format!("{c:>width$}")).collect();
            writeln!(out, "{}", header.join(" "))?;
            for row in rows {
                let cells: Vec<String> = row
                    .iter()
                    .map(|v| format!("{v:>width$.precision$}"))
                    .collect();
                writeln!(out, "{}", cells.join(" "))?;
            }
            Ok(())
        }
    }
}

fn frame_row(frame: &SimulationFrame) -> Vec<Scalar> {
    vec![frame.time, frame.x, frame.y, frame.vx, frame.vy]
}

pub fn write_frames<W: Write>(
    out: &mut W,
    output: &OutputConfig,
    frames: &[SimulationFrame],
) -> io::Result<()> {
    write_rows(out, output, &FRAME_COLUMNS, frames.iter().map(frame_row), &frames)
}

pub fn write_frame<W: Write>(
    out: &mut W,
    output: &OutputConfig,
    frame: &SimulationFrame,
) -> io::Result<()> {
    write_rows(out, output, &FRAME_COLUMNS, std::iter::once(frame_row(frame)), frame)
}

/// Chart series restricted to `channels`, with time first
///
/// Tables start with a legend giving each column's axis label.
pub fn write_chart<W: Write>(
    out: &mut W,
    output: &OutputConfig,
    points: &[ChartPoint],
    channels: &[ChartChannel],
) -> io::Result<()> {
    if output.format == OutputFormat::Table {
        let legend: Vec<String> = channels
            .iter()
            .map(|c| format!("{} = {}", c.key(), c.label()))
            .collect();
        writeln!(out, "# t = Time (s), {}", legend.join(", "))?;
    }

    let columns: Vec<&str> = std::iter::once("t")
        .chain(channels.iter().map(|c| c.key()))
        .collect();
    let rows = points.iter().map(|point| {
        std::iter::once(point.t)
            .chain(channels.iter().map(|c| c.value(point)))
            .collect::<Vec<Scalar>>()
    });
    write_rows(out, output, &columns, rows, &points)
}

/// A single named value such as a horizon
pub fn write_scalar<W: Write>(
    out: &mut W,
    output: &OutputConfig,
    name: &str,
    value: Scalar,
) -> io::Result<()> {
    let precision = output.precision;
    match output.format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::json!({ name: value })),
        OutputFormat::Csv => writeln!(out, "{name}\n{value:.precision$}"),
        OutputFormat::Table => writeln!(out, "{name}: {value:.precision$}"),
    }
}
