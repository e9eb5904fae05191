use std::{fs, path::Path};

use crate::{
    config::CorpusLayout,
    diacritic::DiacriticClass,
    error::{io_at, CorpusResult},
};

const POSITIONS: [&str; 3] = ["START", "MID", "END"];

fn phones(class: DiacriticClass) -> impl Iterator<Item = String> {
    POSITIONS
        .into_iter()
        .map(move |position| format!("{}_{}", class.label(), position))
}

/// Each label pronounced as its three position phones.
pub fn dict() -> String {
    let lines: Vec<String> = DiacriticClass::ALL
        .into_iter()
        .map(|class| {
            let phones: Vec<String> = phones(class).collect();
            format!("{} {}", class.label(), phones.join(" "))
        })
        .collect();
    lines.join("\n") + "\n"
}

pub fn phone() -> String {
    let lines: Vec<String> = std::iter::once("SIL".to_owned())
        .chain(DiacriticClass::ALL.into_iter().flat_map(phones))
        .collect();
    lines.join("\n") + "\n"
}

pub fn filler() -> String {
    ["<s> SIL", "</s> SIL", "<sil> SIL"].join("\n") + "\n"
}

pub fn jsgf() -> String {
    let labels: Vec<&str> = DiacriticClass::ALL
        .into_iter()
        .map(DiacriticClass::label)
        .collect();
    format!(
        "#JSGF V1.0;\n/**\n * JSGF grammar for diacritic recognition\n */\ngrammar diacritics;\npublic <diacritic> = ({});\n",
        labels.join(" | ")
    )
}

/// Writes trvn.dic, trvn.filler, trvn.phone and trvn.jsgf under `etc/`.
pub fn write_static_files(layout: &CorpusLayout) -> CorpusResult<()> {
    for (name, contents) in [
        ("trvn.dic", dict()),
        ("trvn.filler", filler()),
        ("trvn.phone", phone()),
        ("trvn.jsgf", jsgf()),
    ] {
        let path = layout.etc_file(name);
        tracing::info!("Creating {}...", name);
        write(&path, &contents)?;
    }
    Ok(())
}

fn write(path: &Path, contents: &str) -> CorpusResult<()> {
    fs::write(path, contents).map_err(io_at(path))
}
