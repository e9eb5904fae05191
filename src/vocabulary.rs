use std::{collections::HashSet, fs, path::Path};

use crate::{
    diacritic::DiacriticClass,
    error::{io_at, CorpusResult},
};

/// Words of `words` that are not listed in `blacklist`, in their original order.
pub fn load_vocabulary(words: &Path, blacklist: &Path) -> CorpusResult<Vec<String>> {
    let blacklist = fs::read_to_string(blacklist).map_err(io_at(blacklist))?;
    let words = fs::read_to_string(words).map_err(io_at(words))?;
    Ok(filter_words(&words, &blacklist))
}

pub fn filter_words(words: &str, blacklist: &str) -> Vec<String> {
    let blacklist: HashSet<&str> = split_lines(blacklist).into_iter().collect();
    split_lines(words)
        .into_iter()
        .filter(|word| !blacklist.contains(word))
        .map(str::to_owned)
        .collect()
}

/// Lines of `text` without the trailing run of empty lines; blank lines in between stay.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// `<s> LABEL </s>` for every word, the LM training text.
pub fn label_lines<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words
        .iter()
        .map(|word| format!("<s> {} </s>", DiacriticClass::classify(word.as_ref()).label()))
        .collect()
}
