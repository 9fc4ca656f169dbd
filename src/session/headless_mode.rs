//! Headless mode execution
//!
//! One action per process: the result element is printed to stdout.

use crate::cli_messages::print_action_outcome;
use crate::dispatcher::{Action, Dispatcher, ResultSink, Submission};
use crate::render::ResultView;
use std::io::Write;
use std::sync::Mutex;

/// Prints result elements to a writer.
pub struct WriterSink<W: Write + Send> {
    out: Mutex<W>,
    /// Print markdown reviews as their source instead of HTML.
    raw_markdown: bool,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(out: W, raw_markdown: bool) -> Self {
        Self {
            out: Mutex::new(out),
            raw_markdown,
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait::async_trait]
impl<W: Write + Send> ResultSink for WriterSink<W> {
    async fn show(&self, _action: Action, view: &ResultView) {
        let text = match view {
            ResultView::Markdown { source, .. } if self.raw_markdown => source.clone(),
            _ => view.text(),
        };
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        let _ = writeln!(out, "{}", text.trim_end_matches('\n'));
        let _ = out.flush();
    }
}

/// Runs one action and prints its result element.
///
/// # Returns
/// * `Ok(true)` - The backend answered and the result was printed
/// * `Ok(false)` - The request failed; `Error: ...` was printed
pub async fn run_headless_mode(
    dispatcher: &Dispatcher,
    submission: Submission,
    raw_markdown: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let sink = WriterSink::new(std::io::stdout(), raw_markdown);
    let view = dispatcher.submit(&submission, &sink).await;
    print_action_outcome(submission.action(), view.is_error());
    Ok(!view.is_error())
}
