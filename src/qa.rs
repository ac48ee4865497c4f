//! Question answering over an extracted page.
//!
//! Answer generation is left to the caller: plug a model client in by
//! implementing [`Answerer`]. [`PlaceholderAnswerer`] returns a fixed reply
//! and is useful for wiring and tests.

use crate::markdown;
use crate::result::PageExtractionResult;

/// Fixed reply of [`PlaceholderAnswerer`].
pub const PLACEHOLDER_ANSWER: &str = "Generated answer...";

/// Produces an answer to a question using a page as context.
pub trait Answerer {
    /// Answer `question` from `context`.
    fn answer(&self, question: &str, context: &PageExtractionResult) -> String;
}

/// Any `Fn(&str, &PageExtractionResult) -> String` closure is an answerer.
impl<F> Answerer for F
where
    F: Fn(&str, &PageExtractionResult) -> String,
{
    fn answer(&self, question: &str, context: &PageExtractionResult) -> String {
        self(question, context)
    }
}

/// Answerer that ignores its input and returns [`PLACEHOLDER_ANSWER`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAnswerer;

impl Answerer for PlaceholderAnswerer {
    fn answer(&self, _question: &str, _context: &PageExtractionResult) -> String {
        PLACEHOLDER_ANSWER.to_string()
    }
}

/// Build a prompt-style context block: the page as Markdown followed by the question.
///
/// ```
/// use rs_webscrape::{extract_page, qa};
///
/// let page = extract_page("<title>T</title><body><p>Fact.</p></body>");
/// let prompt = qa::build_prompt("What is it?", &page);
/// assert!(prompt.starts_with("# T\n\nFact."));
/// assert!(prompt.ends_with("Question: What is it?"));
/// ```
#[must_use]
pub fn build_prompt(question: &str, context: &PageExtractionResult) -> String {
    format!("{}\n\nQuestion: {}", markdown::to_markdown(context), question.trim())
}
