use std::{
    fs::{self, File, OpenOptions},
    io,
    path::{Path, PathBuf},
};

use walkdir::{DirEntry, WalkDir};

use crate::{
    config::CorpusLayout,
    diacritic::DiacriticClass,
    error::{io_at, CorpusError, CorpusResult},
    transliterate::{transliterate, Scheme},
};

/// Recordings of one speaker for one diacritic class, after copying into the corpus.
#[derive(Debug, Clone)]
pub struct CopiedGroup {
    pub speaker_index: usize,
    pub speaker: String,
    pub class: DiacriticClass,
    /// Destination paths, in source listing order.
    pub files: Vec<PathBuf>,
}

/// Copies `<source>/<speaker>/<class>/*` to `<dest>/wav/<speaker>/<index>_<name>`.
///
/// Speakers are indexed from zero in sorted order. Any destination that already
/// exists aborts the whole run with [`CorpusError::Collision`].
pub fn copy_corpus(layout: &CorpusLayout, scheme: Scheme) -> CorpusResult<Vec<CopiedGroup>> {
    let mut groups = Vec::new();

    for (speaker_index, speaker_dir) in list_entries(&layout.source, true)?.into_iter().enumerate() {
        let speaker = speaker_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dest_dir = layout.wav_dir().join(transliterate(&speaker, scheme));

        for class in DiacriticClass::ALL {
            let class_dir = speaker_dir.join(class.dir_name());
            let words = if class_dir.is_dir() {
                list_entries(&class_dir, false)?
            } else {
                Vec::new()
            };

            if !dest_dir.is_dir() {
                fs::create_dir_all(&dest_dir).map_err(io_at(&dest_dir))?;
            }

            let total = words.len();
            let mut files = Vec::with_capacity(total);
            for (word_idx, word) in words.iter().enumerate() {
                let dest = dest_dir.join(dest_file_name(speaker_index, word, scheme));
                copy_word(word, &dest)?;
                tracing::debug!("Copied {} -> {}", word.display(), dest.display());
                if let Some(percent) = progress_step(word_idx + 1, total) {
                    tracing::info!("Copy {}/{} {}%", speaker, class.dir_name(), percent);
                }
                files.push(dest);
            }
            if total == 0 {
                tracing::info!("Copy {}/{}: no recordings", speaker, class.dir_name());
            }

            groups.push(CopiedGroup {
                speaker_index,
                speaker: speaker.clone(),
                class,
                files,
            });
        }
    }

    Ok(groups)
}

/// `<speakerIndex>_<transliterated file name>`
pub fn dest_file_name(speaker_index: usize, word: &Path, scheme: Scheme) -> String {
    let name = word
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    format!("{}_{}", speaker_index, transliterate(&name, scheme))
}

/// Percentage copied after `done` of `total` files, reported on the first file and
/// whenever it enters a new tenth.
fn progress_step(done: usize, total: usize) -> Option<usize> {
    let percent = done * 100 / total;
    let previous = (done - 1) * 100 / total;
    (done == 1 || percent / 10 != previous / 10).then_some(percent)
}

fn copy_word(src: &Path, dest: &Path) -> CorpusResult<()> {
    let mut reader = File::open(src).map_err(io_at(src))?;
    let mut writer = match OpenOptions::new().write(true).create_new(true).open(dest) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(CorpusError::Collision {
                path: dest.to_owned(),
            })
        }
        Err(e) => return Err(io_at(dest)(e)),
    };
    io::copy(&mut reader, &mut writer).map_err(io_at(dest))?;
    Ok(())
}

/// Immediate children of `dir` in file name order, either directories or regular files.
/// Hidden entries (`.DS_Store`, `.Trashes`, ...) are skipped.
fn list_entries(dir: &Path, dirs: bool) -> CorpusResult<Vec<PathBuf>> {
    let mut entries = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_owned();
            CorpusError::Io {
                path,
                source: e.into(),
            }
        })?;
        let file_type = entry.file_type();
        if (dirs && file_type.is_dir()) || (!dirs && file_type.is_file()) {
            entries.push(entry.into_path());
        }
    }
    Ok(entries)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
