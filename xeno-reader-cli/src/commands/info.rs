use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use xeno_reader_core::sector::{DATA_SIZE, mode_name};
use xeno_reader_lib::XenoImage;
use xeno_reader_lib::display::summarize;
use xeno_reader_lib::util::{format_bytes, format_bytes_approx};

use crate::error::CliError;

pub(crate) fn run_info(image_path: &Path) -> Result<(), CliError> {
    let image = XenoImage::open(image_path)?;
    let variant = image.disc_variant();
    let summary = summarize(image.root());

    log::info!(
        "{}",
        image_path
            .display()
            .if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  Disc:        {} ({})",
        variant.if_supports_color(Stdout, |t| t.cyan()),
        String::from_utf8_lossy(variant.identifier()),
    );

    let count = image.sector_count();
    if count == variant.expected_sector_count() {
        log::info!("  Sectors:     {}", count);
    } else {
        log::info!(
            "  Sectors:     {} {}",
            count,
            format!("(expected {})", variant.expected_sector_count())
                .if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    log::info!(
        "  Data region: {} ({})",
        format_bytes(DATA_SIZE as u64),
        mode_name()
    );
    log::info!("  Records:     {}", image.entry_count());
    log::info!("  Directories: {}", summary.dirs);
    log::info!(
        "  Files:       {} ({})",
        summary.files,
        format_bytes_approx(summary.total_bytes)
    );
    if summary.padding_slots > 0 {
        log::info!(
            "  Padding:     {} slots",
            summary.padding_slots.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("  Max depth:   {}", summary.max_depth);
    Ok(())
}
