//! CSV report of the measured angles.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use hipmark_core::{Result, Side};
use tracing::info;

use crate::annotation_set::AnnotationSet;
use crate::label_store::LabelStore;

pub const CSV_HEADER: &str = "Image,Left_Norberg_Angle,Right_Norberg_Angle,Left_Joint_Angle,Right_Joint_Angle,Avg_Norberg_Angle,Avg_Joint_Angle";

/// Writes one row per stored image to `path`.
pub fn export_csv(path: &Path, store: &LabelStore) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_csv(&mut writer, store)?;
    writer.flush()?;
    info!("Exported {} rows to {:?}", store.len(), path);
    Ok(())
}

/// Writes the header and one row per image to `out`.
///
/// Angles use two decimals. An average is written only when both sides are
/// present; absent values leave the cell empty.
pub fn write_csv<W: Write>(out: &mut W, store: &LabelStore) -> std::io::Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;
    for (image, set) in store.iter() {
        writeln!(out, "{}", csv_row(image, set))?;
    }
    Ok(())
}

fn csv_row(image: &str, set: &AnnotationSet) -> String {
    let (ln, rn) = (set.norberg_angle(Side::Left), set.norberg_angle(Side::Right));
    let (lj, rj) = (set.joint_angle(Side::Left), set.joint_angle(Side::Right));
    let cells = [
        ln,
        rn,
        lj,
        rj,
        average(ln, rn),
        average(lj, rj),
    ];

    let mut row = escape_field(image);
    for cell in cells {
        row.push(',');
        if let Some(v) = cell {
            row.push_str(&format!("{:.2}", v));
        }
    }
    row
}

fn average(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    Some((a? + b?) / 2.0)
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
