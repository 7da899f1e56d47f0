//! Repairs repetition artifacts in model output. Summarization models
//! under sampling tend to stutter short phrases ("the cat the cat sat");
//! these passes collapse exact adjacent repeats without touching anything
//! else.
//!
//! The `regex` crate has no backreferences, so the repeated-group passes
//! operate on a whitespace-tokenized view of the text instead of a
//! backreferencing pattern. Whitespace normalization and trimming fall
//! out of the final single-space join.

/// Removes exact adjacent repeats of 1-3-word groups, collapses runs of
/// whitespace to single spaces and trims the result.
///
/// Idempotent: `clean_summary(clean_summary(s)) == clean_summary(s)`.
/// Non-repeated words are never reordered or dropped.
pub fn clean_summary(text: &str) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();

    // Collapsing a run can create a new adjacency to its left (e.g.
    // "a a b a b" -> "a b a b"), so run the passes to a fixpoint. Each
    // round shrinks the token list, so this terminates.
    loop {
        let mut collapsed = collapse_repeated_groups(&words);
        collapsed = collapse_repeated_words(&collapsed);
        if collapsed == words {
            return collapsed.join(" ");
        }
        words = collapsed;
    }
}

/// Collapses runs of a 1-3-word group immediately followed by one or
/// more exact repeats of the same group into a single occurrence.
/// Longer groups are tried first so "a b c a b c" collapses as one
/// phrase rather than word by word.
fn collapse_repeated_groups<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let mut out = Vec::with_capacity(words.len());
    let mut i = 0;

    'outer: while i < words.len() {
        for group in (1..=3).rev() {
            if i + 2 * group <= words.len()
                && words[i..i + group] == words[i + group..i + 2 * group]
            {
                // skip every further exact repeat of this group
                let mut next = i + group;
                while next + group <= words.len()
                    && words[i..i + group] == words[next..next + group]
                {
                    next += group;
                }
                out.extend_from_slice(&words[i..i + group]);
                i = next;
                continue 'outer;
            }
        }
        out.push(words[i]);
        i += 1;
    }

    out
}

/// Residual single-word stutter pass. The group pass prefers the longest
/// repeating group, which can leave a doubled word behind (e.g.
/// "a a b a a b" collapses to "a a b" first).
fn collapse_repeated_words<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let mut out: Vec<&'a str> = Vec::with_capacity(words.len());
    for &word in words {
        if out.last() != Some(&word) {
            out.push(word);
        }
    }
    out
}
