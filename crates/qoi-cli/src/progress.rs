//! Single-line percentage meter on stderr.

use std::io::Write;
use std::path::Path;

/// Redraws `Encoding <path>... <pct>%` in place as rows complete.
pub struct ProgressMeter<W: Write> {
    out: W,
    label: String,
    last_percent: Option<u64>,
    enabled: bool,
}

impl ProgressMeter<std::io::Stderr> {
    pub fn stderr(path: &Path, enabled: bool) -> Self {
        Self::new(std::io::stderr(), path, enabled)
    }
}

impl<W: Write> ProgressMeter<W> {
    pub fn new(out: W, path: &Path, enabled: bool) -> Self {
        Self {
            out,
            label: path.display().to_string(),
            last_percent: None,
            enabled,
        }
    }

    pub fn update(&mut self, done: u64, total: u64) {
        if !self.enabled || total == 0 {
            return;
        }
        let percent = done * 100 / total;
        if self.last_percent == Some(percent) {
            return;
        }
        self.last_percent = Some(percent);
        // Terminal output is best effort
        let _ = write!(self.out, "\rEncoding {}... {}%", self.label, percent);
        let _ = self.out.flush();
    }

    /// End the line so the next file's meter doesn't overwrite this one.
    pub fn finish(&mut self) {
        if self.enabled && self.last_percent.is_some() {
            let _ = writeln!(self.out);
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
