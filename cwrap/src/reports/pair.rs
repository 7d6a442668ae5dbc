//! Report for the pair command.

use std::path::Path;

use cwrap_codegen::DeclarationPair;
use cwrap_core::WriteResult;

use super::{Output, Report};

/// What the pair command produced.
#[derive(Debug, Default)]
pub struct PairReport {
    dry_run: bool,
    previews: Vec<(String, String)>,
    written: Vec<(String, WriteResult)>,
}

impl PairReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Record both files of a pair for preview.
    pub fn preview(&mut self, pair: &DeclarationPair) {
        self.previews
            .push((pair.c_file_name().to_string(), pair.c_text().to_string()));
        self.previews
            .push((pair.h_file_name().to_string(), pair.h_text().to_string()));
    }

    /// Record a written file.
    pub fn written(&mut self, dir: &Path, file_name: &str, result: WriteResult) {
        self.written
            .push((dir.join(file_name).display().to_string(), result));
    }
}

impl Report for PairReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            for (path, content) in &self.previews {
                out.divider(path);
                out.preformatted(content);
            }
            out.divider("Summary");
            out.preformatted(&format!(
                "{} files would be generated\n",
                self.previews.len()
            ));
            return;
        }

        out.section("Generated");
        for (path, result) in &self.written {
            match result {
                WriteResult::Created => out.added_item(path),
                WriteResult::Overwritten => out.replaced_item(path),
            }
        }
        if self.written.is_empty() {
            out.newline();
        }
    }
}
