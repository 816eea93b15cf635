/// Partition normalized text into size-bounded segments.
///
/// Sentences are detected by a literal `". "` split. That is an
/// approximation, not sentence segmentation: a period inside an
/// abbreviation or a decimal number followed by a space also splits.
/// Boundaries are part of the service contract, so the heuristic stays
/// as it is.
///
/// Each candidate sentence is appended (with its separator restored) to an
/// accumulating buffer that is flushed whenever the next sentence would push
/// it past `max_chunk_size`. A single sentence longer than the limit is
/// sub-split on word boundaries with the same accumulate/flush logic; an
/// unsplittable word longer than the limit passes through unchanged as its
/// own oversized chunk. Output order equals input order.
pub fn split_into_chunks(content: &str, max_chunk_size: usize) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in content.split(". ") {
        if current.len() + sentence.len() > max_chunk_size {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current.push_str(sentence);
                current.push_str(". ");
            } else {
                split_words(sentence, max_chunk_size, &mut chunks, &mut current);
            }
        } else {
            current.push_str(sentence);
            current.push_str(". ");
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

fn split_words(
    sentence: &str,
    max_chunk_size: usize,
    chunks: &mut Vec<String>,
    current: &mut String,
) {
    for word in sentence.split(' ') {
        if current.len() + word.len() > max_chunk_size && !current.is_empty() {
            chunks.push(std::mem::take(current));
        }
        current.push_str(word);
        current.push(' ');
    }
}
