//! CLI output formatting.
//!
//! # Output Format
//!
//! ```text
//! Wrote: synth/00-minimal-av-softmarks.jpg  (from drawing/00-minimal-av-softmarks/take-2/frame-0042.jpg)   stdout
//! Skip (no jpeg): drawing/01-dense-grid                                                                     stderr
//! Done. Processed 1 folder(s).                                                                              stderr
//! ```
//!
//! Results go to stdout so they can be piped; everything else goes to stderr.
//!
//! # Architecture
//!
//! [`format_process_event`] is pure (returns the target stream and the line)
//! for testability. The run itself only sees the [`Reporter`] trait, so tests
//! can collect events into a `Vec` while the binary uses [`ConsoleReporter`].

use crate::process::ProcessEvent;
use std::io::Write;

/// Which standard stream a line belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Sink for [`ProcessEvent`]s emitted during a run.
pub trait Reporter {
    fn report(&mut self, event: ProcessEvent);
}

/// Records events in order.
impl Reporter for Vec<ProcessEvent> {
    fn report(&mut self, event: ProcessEvent) {
        self.push(event);
    }
}

/// Prints each event as one human-readable line on stdout or stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: ProcessEvent) {
        let (stream, line) = format_process_event(&event);
        // A closed pipe shouldn't turn a finished thumbnail into a failed run
        let _ = match stream {
            Stream::Stdout => writeln!(std::io::stdout().lock(), "{line}"),
            Stream::Stderr => writeln!(std::io::stderr().lock(), "{line}"),
        };
    }
}

pub fn format_process_event(event: &ProcessEvent) -> (Stream, String) {
    match event {
        ProcessEvent::Wrote { output, source } => (
            Stream::Stdout,
            format!("Wrote: {}  (from {})", output.display(), source.display()),
        ),
        ProcessEvent::Skipped { folder } => (
            Stream::Stderr,
            format!("Skip (no jpeg): {}", folder.display()),
        ),
        ProcessEvent::Finished { processed } => (
            Stream::Stderr,
            format!("Done. Processed {processed} folder(s)."),
        ),
    }
}

/// Usage text with an example invocation.
pub fn format_usage(program: &str) -> Vec<String> {
    vec![
        "Usage:".to_string(),
        format!("  {program} <artefact_drawing_dir> <config_synth_dir>"),
        String::new(),
        "Example:".to_string(),
        format!("  {program} \\"),
        "    \"performances/Improvisation1/artefact/drawing\" \\".to_string(),
        "    \"performances/Improvisation1/config/synth\"".to_string(),
    ]
}

/// `Error: <message>` followed by the usage block, for stderr.
pub fn format_usage_error(program: &str, message: &str) -> Vec<String> {
    let mut lines = vec![format!("Error: {message}"), String::new()];
    lines.extend(format_usage(program));
    lines
}
