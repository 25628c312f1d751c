use std::path::Path;

use xeno_reader_lib::XenoImage;
use xeno_reader_lib::display::tree_lines;

use crate::error::CliError;

pub(crate) fn run_tree(image_path: &Path) -> Result<(), CliError> {
    let image = XenoImage::open(image_path)?;
    for line in tree_lines(image.root()) {
        log::info!("{}", line);
    }
    Ok(())
}
