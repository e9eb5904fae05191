use std::{
    fs,
    path::{Component, Path},
};

use crate::{
    config::CorpusLayout,
    diacritic::DiacriticClass,
    error::{io_at, CorpusResult},
};

/// Fileids and transcriptions of one split, line for line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub fileids: Vec<String>,
    pub transcriptions: Vec<String>,
}

impl Manifest {
    /// `wav_dir` is the corpus audio root that fileids are relative to.
    pub fn push(&mut self, wav_dir: &Path, word: &Path, class: DiacriticClass) {
        self.fileids.push(fileid(wav_dir, word));
        self.transcriptions.push(transcription(word, class));
    }

    pub fn len(&self) -> usize {
        self.fileids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fileids.is_empty()
    }

    /// Writes `etc/<prefix>.fileids` and `etc/<prefix>.transcription`.
    pub fn write(&self, layout: &CorpusLayout, prefix: &str) -> CorpusResult<()> {
        write_lines(&layout.etc_file(&format!("{prefix}.fileids")), &self.fileids)?;
        write_lines(
            &layout.etc_file(&format!("{prefix}.transcription")),
            &self.transcriptions,
        )
    }
}

/// Path below the corpus audio root without extension, `/` separated.
pub fn fileid(wav_dir: &Path, word: &Path) -> String {
    let relative = word.strip_prefix(wav_dir).unwrap_or(word).with_extension("");
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

pub fn transcription(word: &Path, class: DiacriticClass) -> String {
    let stem = word
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    format!("<s> {} </s> ({})", class.label(), stem)
}

/// One entry per line, every line newline terminated.
pub fn write_lines(path: &Path, lines: &[String]) -> CorpusResult<()> {
    let mut contents = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    fs::write(path, contents).map_err(io_at(path))?;
    tracing::info!("Wrote {} ({} lines)", path.display(), lines.len());
    Ok(())
}
