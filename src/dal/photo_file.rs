use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{
    configuration::OutputFormat,
    domain::photo::{PhotoRecord, PHOTO_RECORD_COLUMNS},
};

const SEPARATOR: char = ',';

#[derive(Debug, PartialEq, Eq)]
pub enum SaveResult {
    Saved(usize),
    NothingToSave,
}

/// Creates or overwrites `path`. No file is touched when `photos` is empty.
pub fn save_photos(
    photos: &[PhotoRecord],
    path: &Path,
    format: OutputFormat,
) -> anyhow::Result<SaveResult> {
    if photos.is_empty() {
        log::info!("No photos to save");
        return Ok(SaveResult::NothingToSave);
    }

    let mut out = BufWriter::new(File::create(path)?);
    match format {
        OutputFormat::Csv => write_csv(&mut out, photos)?,
        OutputFormat::Json => write_json(&mut out, photos)?,
    }
    out.flush()?;

    log::info!("Saved {} photos to {}", photos.len(), path.display());

    Ok(SaveResult::Saved(photos.len()))
}

pub fn write_csv<W: Write>(mut w: W, photos: &[PhotoRecord]) -> io::Result<()> {
    let header: Vec<String> = PHOTO_RECORD_COLUMNS.iter().map(|c| c.to_string()).collect();
    write_row(&mut w, &header)?;

    for photo in photos {
        write_row(&mut w, &photo.to_row())?;
    }

    Ok(())
}

pub fn write_json<W: Write>(mut w: W, photos: &[PhotoRecord]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut w, photos)?;
    writeln!(w)?;

    Ok(())
}

fn needs_quotes(field: &str) -> bool {
    field.contains(SEPARATOR) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row<W: Write>(w: &mut W, row: &[String]) -> io::Result<()> {
    let cells: Vec<String> = row
        .iter()
        .map(|cell| match needs_quotes(cell) {
            true => format!("\"{}\"", cell.replace('"', "\"\"")),
            false => cell.to_string(),
        })
        .collect();

    write!(w, "{}\r\n", cells.join(&SEPARATOR.to_string()))
}
