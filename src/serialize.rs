use crate::error::{Error, Result};
use flate2::read::GzDecoder;
use flate2::{write::GzEncoder, Compression};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tar::{Archive, Builder, Header};

pub const SETUP_FILE: &str = "setup.json";
pub const INITIAL_GRID_FILE: &str = "initial_grid.json";
pub const FINAL_GRID_FILE: &str = "final_grid.json";

pub fn create_archive(path: impl AsRef<Path>) -> Result<Builder<GzEncoder<fs::File>>> {
    let outfile = fs::File::create(path)?;
    let zipper = GzEncoder::new(outfile, Compression::default());
    Ok(Builder::new(zipper))
}

/// Finishes the tar stream and the gzip stream underneath it.
pub fn finish_archive(archive: Builder<GzEncoder<fs::File>>) -> Result<()> {
    archive.into_inner()?.finish()?;
    Ok(())
}

/// Appends `data` as a JSON entry named `path` to a run archive, e.g. the
/// boundary setup or a grid snapshot of one species.
pub fn serialize_object<W: Write>(
    path: impl AsRef<Path>,
    data: &impl Serialize,
    archive: &mut Builder<W>,
) -> Result<()> {
    let data = serde_json::to_string(data)?.into_bytes();

    let mut header = Header::new_gnu();
    header.set_path(path)?;
    header.set_size(data.len() as u64);
    header.set_mode(0o664);
    header.set_cksum();

    archive.append(&header, &data as &[u8])?;
    Ok(())
}

/// Reads the JSON entry `entry` back out of a `.tar.gz` archive.
pub fn read_object<T: DeserializeOwned>(
    archive_path: impl AsRef<Path>,
    entry: impl AsRef<Path>,
) -> Result<T> {
    let file = fs::File::open(archive_path)?;
    let unzipper = GzDecoder::new(file);
    let mut archive = Archive::new(unzipper);

    for candidate in archive.entries()? {
        let candidate = candidate?;
        if candidate.path()? == entry.as_ref() {
            let data = serde_json::from_reader(candidate)?;
            return Ok(data);
        }
    }
    Err(Error::EntryNotFound(entry.as_ref().display().to_string()))
}
