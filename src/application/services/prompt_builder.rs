/// Exact phrase the model is instructed to use when the answer is not in
/// the provided text.
pub const FALLBACK_PHRASE: &str = "I cannot find the answer in the document.";

/// Whether the prompt carries the whole normalized document or only a
/// leading slice of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    Full,
    Partial,
}

/// Assemble the instruction-constrained answer prompt.
///
/// The content slice is embedded verbatim; the transport layer serializes
/// the whole prompt as a JSON string, so no escaping happens here.
pub fn build_answer_prompt(content: &str, question: &str, mode: PromptMode) -> String {
    match mode {
        PromptMode::Full => format!(
            "You are a document assistant. Answer the user's question based ONLY on the provided text.\n\
             If the answer cannot be found in the text, say \"{FALLBACK_PHRASE}\"\n\n\
             IMPORTANT: The document might be truncated due to length limitations. Answer based on what you can read.\n\n\
             Document content: {content}\n\n\
             Question: {question}\n\n\
             Answer:"
        ),
        PromptMode::Partial => format!(
            "Based on this partial document content, answer the question. If unsure, say you need more context.\n\n\
             Partial document content: {content}\n\n\
             Question: {question}\n\n\
             Answer:"
        ),
    }
}

/// Prompt for the diagnostic content probe.
pub fn build_summary_probe(content: &str) -> String {
    format!("Please summarize this text in one sentence: {content}")
}
