use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use xeno_reader_lib::settings::resolve_output_dir;
use xeno_reader_lib::util::format_bytes_approx;
use xeno_reader_lib::{ExtractOptions, ExtractPlan, ExtractProgress, Settings, XenoImage, extract};

use crate::error::CliError;

pub(crate) fn run_extract(
    image_path: &Path,
    output: Option<PathBuf>,
    dry_run: bool,
    no_manifest: bool,
    sha1: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let settings = Settings::load()?;
    let output_dir = resolve_output_dir(output, &settings, image_path);
    let options = ExtractOptions::new()
        .dry_run(dry_run)
        .manifest(settings.extract.manifest && !no_manifest)
        .sha1(settings.extract.sha1 || sha1);

    let mut image = XenoImage::open(image_path)?;
    log::info!(
        "{} {} -> {}",
        "Extracting".if_supports_color(Stdout, |t| t.bold()),
        image.disc_variant().if_supports_color(Stdout, |t| t.cyan()),
        output_dir.display(),
    );

    let (root, store) = image.split_mut();
    let plan = ExtractPlan::from_tree(root);

    if dry_run {
        for dir in &plan.dirs {
            log::info!("  {}/", dir.display());
        }
        for file in &plan.files {
            log::info!(
                "  {}  ({} bytes from sector {})",
                file.path.display(),
                file.entry.size(),
                file.entry.sector()
            );
        }
    }

    let pb = if quiet || dry_run {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len} {msg}")
                .expect("static pattern")
                .progress_chars("=> "),
        );
        pb
    };

    let progress_callback = |progress: ExtractProgress| match progress {
        ExtractProgress::Starting { total_files, .. } => {
            pb.set_length(total_files as u64);
        }
        ExtractProgress::File {
            ref path,
            file_index,
            ..
        } => {
            pb.set_position(file_index as u64);
            pb.set_message(path.display().to_string());
        }
        ExtractProgress::Finished => {
            pb.finish_and_clear();
        }
    };

    let report = extract(store, &plan, &output_dir, &options, &progress_callback)?;

    let verb = if dry_run { "Would write" } else { "Wrote" };
    log::info!(
        "{} {} files ({}) in {} directories",
        verb.if_supports_color(Stdout, |t| t.green()),
        report.files_written,
        format_bytes_approx(report.bytes_written),
        report.dirs_created,
    );
    if report.skipped_slots > 0 {
        log::info!(
            "  {}",
            format!("Skipped {} padding slots", report.skipped_slots)
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    if let Some(path) = &report.manifest_path {
        log::info!("  Manifest: {}", path.display());
    }
    Ok(())
}
