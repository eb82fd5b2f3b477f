//! Encoding one input file to `<output dir>/<stem>.qoi`.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use qoi_core::{load_image, EncodeStats};

use crate::progress::ProgressMeter;

/// Result of a successful file encode.
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: EncodeStats,
}

impl FileReport {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "input": self.input.display().to_string(),
            "output": self.output.display().to_string(),
            "stats": self.stats,
        })
    }
}

/// `<output_dir>/<file stem>.qoi`
pub fn output_path(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let Some(stem) = input.file_stem() else {
        bail!("{} has no file name", input.display());
    };
    let mut name = stem.to_os_string();
    name.push(".qoi");
    Ok(output_dir.join(name))
}

/// Load `input`, encode it, and write the result into `output_dir`.
///
/// The output file is removed again if encoding or writing fails, so a
/// failed run never leaves a truncated `.qoi` behind.
pub fn encode_file(input: &Path, output_dir: &Path, show_progress: bool) -> Result<FileReport> {
    let image = load_image(input).with_context(|| format!("Failed to load {}", input.display()))?;
    log::debug!(
        "loaded {} ({}x{})",
        input.display(),
        image.width,
        image.height
    );

    let output = output_path(input, output_dir)?;
    let file = File::create(&output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    let mut meter = ProgressMeter::stderr(input, show_progress);
    let result = image.encode_qoi_to(&mut writer, |done, total| meter.update(done, total));
    meter.finish();
    drop(writer);

    match result {
        Ok(stats) => Ok(FileReport {
            input: input.to_path_buf(),
            output,
            stats,
        }),
        Err(err) => {
            if let Err(remove_err) = std::fs::remove_file(&output) {
                log::warn!(
                    "could not remove partial output {}: {}",
                    output.display(),
                    remove_err
                );
            }
            Err(err).with_context(|| format!("Failed to encode {}", input.display()))
        }
    }
}
