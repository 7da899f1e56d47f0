//! Splits a transcript into chunks sized for the summarization model's
//! input limit. Chunks break only at whitespace; a single word longer
//! than the limit is emitted as an oversized chunk rather than broken.

/// Splits `text` into whitespace-bounded chunks of at most `max_chars`
/// characters each. Word order is preserved and no word is ever split
/// across chunks. Empty (or all-whitespace) input yields no chunks.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            chunks.push(std::mem::take(&mut current));
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(chunk_text("", 1000).is_empty());
        assert!(chunk_text("   \n\t  ", 1000).is_empty());
    }

    #[test]
    fn short_input_is_a_single_chunk() {
        let chunks = chunk_text("the quick brown fox", 1000);
        assert_eq!(chunks, vec!["the quick brown fox"]);
    }

    #[test]
    fn chunks_respect_max_length() {
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        let chunks = chunk_text(text, 12);
        for chunk in &chunks {
            assert!(
                chunk.len() <= 12,
                "chunk {:?} exceeds max length {}",
                chunk,
                12
            );
        }
    }

    #[test]
    fn words_are_never_broken() {
        let text = "one two three four five";
        for max in 3..24 {
            for chunk in chunk_text(text, max) {
                for word in chunk.split_whitespace() {
                    assert!(
                        ["one", "two", "three", "four", "five"].contains(&word),
                        "word {:?} was broken at max {}",
                        word,
                        max
                    );
                }
            }
        }
    }

    #[test]
    fn rejoining_chunks_reproduces_word_sequence() {
        let text = "  lorem   ipsum dolor\tsit amet consectetur\nadipiscing elit  ";
        let chunks = chunk_text(text, 10);
        let rejoined = chunks.join(" ");
        let expected: Vec<&str> = text.split_whitespace().collect();
        let actual: Vec<&str> = rejoined.split_whitespace().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn oversized_word_becomes_its_own_chunk() {
        let text = "a supercalifragilisticexpialidocious b";
        let chunks = chunk_text(text, 5);
        assert_eq!(
            chunks,
            vec!["a", "supercalifragilisticexpialidocious", "b"]
        );
    }
}
