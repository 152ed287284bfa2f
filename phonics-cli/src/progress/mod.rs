//! Progress over word files

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Tracks files read and new words found; draws a bar for two or more files
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
    files_read: u64,
    words_found: usize,
}

impl ProgressReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
            files_read: 0,
            words_found: 0,
        }
    }

    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet || total_files < 2 {
            return;
        }

        let pb = ProgressBar::new(total_files);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record one file and the words it added
    pub fn file_completed(&mut self, filename: &str, new_words: usize) {
        self.files_read += 1;
        self.words_found += new_words;
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{} words ({filename})", self.words_found));
            pb.inc(1);
        }
    }

    /// One-line summary of what was read
    pub fn summary(&self) -> String {
        let words = if self.words_found == 1 { "word" } else { "words" };
        let files = if self.files_read == 1 { "file" } else { "files" };
        format!(
            "{} {words} from {} {files}",
            self.words_found, self.files_read
        )
    }

    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.summary());
        }
        log::info!("Read {}", self.summary());
    }

    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}
