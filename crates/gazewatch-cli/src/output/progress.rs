//! Progress spinner adapter using indicatif.

use std::sync::Mutex;

use gazewatch_core::{AttentionState, ProgressEvent, ProgressSink};
use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

/// Progress adapter for CLI output.
///
/// With a spinner, the current status label is shown next to the frame
/// count. Without one, a status line is printed each time the state of a
/// source changes.
pub struct ProgressBar {
    bar: Option<IndicatifBar>,
    quiet: bool,
    last: Mutex<Option<(String, AttentionState)>>,
}

impl ProgressBar {
    /// Creates a new progress adapter.
    ///
    /// # Arguments
    ///
    /// * `quiet` - If true, suppress all output
    /// * `show_bar` - If true, show a spinner; otherwise print state changes
    #[must_use]
    pub fn new(quiet: bool, show_bar: bool) -> Self {
        let bar = (!quiet && show_bar).then(|| {
            let bar = IndicatifBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {prefix} {pos} frames  {msg}")
            {
                bar.set_style(style);
            }
            bar
        });

        Self {
            bar,
            quiet,
            last: Mutex::new(None),
        }
    }

    /// Records `state` for `source`, returning true if it differs from the
    /// previous state seen for the same source.
    fn changed(&self, source: &str, state: AttentionState) -> bool {
        let mut last = self
            .last
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let changed = !matches!(&*last, Some((s, prev)) if s == source && *prev == state);
        if changed {
            *last = Some((source.to_string(), state));
        }
        changed
    }
}

impl ProgressSink for ProgressBar {
    fn on_event(&self, event: ProgressEvent) {
        if self.quiet {
            return;
        }

        match event {
            ProgressEvent::Started { source, index } => {
                if let Some(bar) = &self.bar {
                    bar.set_position(index as u64);
                    bar.set_prefix(source);
                }
            }
            ProgressEvent::Classified { result } => {
                if let Some(bar) = &self.bar {
                    bar.inc(1);
                    bar.set_message(result.label);
                } else if self.changed(&result.source, result.state) {
                    eprintln!("{}#{}: {}", result.source, result.frame, result.label);
                }
            }
            ProgressEvent::Skipped { reason } => {
                if let Some(bar) = &self.bar {
                    bar.suspend(|| eprintln!("WARN: Skipping frame: {reason}"));
                } else {
                    eprintln!("WARN: Skipping frame: {reason}");
                }
            }
            ProgressEvent::Finished {
                processed,
                skipped,
                inattentive,
            } => {
                if let Some(bar) = &self.bar {
                    bar.finish_with_message(format!(
                        "Done: {processed} classified, {inattentive} inattentive, {skipped} skipped"
                    ));
                }
            }
        }
    }
}
