use std::io::Write;
use std::path::{Path, PathBuf};

use xeno_reader_lib::{XenoImage, find_dir, find_file};

use crate::error::CliError;

pub(crate) fn run_cat(
    image_path: &Path,
    dir: &str,
    index: usize,
    out: Option<PathBuf>,
) -> Result<(), CliError> {
    let mut image = XenoImage::open(image_path)?;
    if find_dir(image.root(), dir).is_none() {
        return Err(CliError::not_found(format!("no directory {}", dir)));
    }
    let file = *find_file(image.root(), dir, index)
        .ok_or_else(|| CliError::not_found(format!("no file {} in {}", index, dir)))?;

    let data = image.read_file(&file)?;
    match out {
        Some(path) => {
            std::fs::write(&path, &data)?;
            log::info!("Wrote {} bytes to {}", data.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
