mod config;
mod corpus;
mod diacritic;
mod error;
mod lm_pipeline;
mod manifest;
mod sphinx_input;
mod split;
mod transliterate;
mod vocabulary;

use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use clap::Parser;
use config::{Cli, CorpusLayout};
use corpus::{copy_corpus, CopiedGroup};
use diacritic::DiacriticClass;
use manifest::Manifest;
use rand::{rngs::StdRng, Rng, SeedableRng};
use split::split_group;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let layout = CorpusLayout::from(&cli);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let groups = copy_corpus(&layout, cli.scheme)
        .with_context(|| format!("copying recordings from {}", layout.source.display()))?;
    log_class_totals(&groups);

    let (train, test) = assemble_manifests(&layout.wav_dir(), groups, &mut rng);
    tracing::info!("{} training and {} test recordings", train.len(), test.len());
    if test.is_empty() {
        tracing::warn!("No recordings held out for testing; every group has fewer than five");
    }
    let etc = layout.etc_dir();
    fs::create_dir_all(&etc).with_context(|| format!("creating {}", etc.display()))?;
    train.write(&layout, "trvn_train")?;
    test.write(&layout, "trvn_test")?;

    let words = vocabulary::load_vocabulary(&layout.words, &layout.blacklist)
        .context("reading the wordlist")?;
    let labels = vocabulary::label_lines(&words);
    sphinx_input::write_static_files(&layout)?;

    if cli.skip_lm {
        tracing::info!("Skipping language model and grammar compilation");
    } else {
        lm_pipeline::build_language_model(&labels, &layout)
            .context("building the language model")?;
        lm_pipeline::compile_grammar(&layout).context("compiling the grammar")?;
    }

    Ok(())
}

/// Splits every group one in five and collects (train, test) manifests in group order.
fn assemble_manifests<R: Rng + ?Sized>(
    wav_dir: &Path,
    groups: Vec<CopiedGroup>,
    rng: &mut R,
) -> (Manifest, Manifest) {
    let mut train = Manifest::default();
    let mut test = Manifest::default();
    for group in groups {
        let split = split_group(group.files, rng);
        tracing::debug!(
            "{} ({}) {}: {} train, {} test",
            group.speaker,
            group.speaker_index,
            group.class.dir_name(),
            split.train.len(),
            split.test.len()
        );
        for word in &split.test {
            test.push(wav_dir, word, group.class);
        }
        for word in &split.train {
            train.push(wav_dir, word, group.class);
        }
    }
    (train, test)
}

fn log_class_totals(groups: &[CopiedGroup]) {
    let mut totals: HashMap<DiacriticClass, usize> = HashMap::new();
    for group in groups {
        *totals.entry(group.class).or_default() += group.files.len();
    }
    for class in DiacriticClass::ALL {
        let total = totals.get(&class).copied().unwrap_or(0);
        tracing::info!(
            "{}: {} recordings, about {} held out",
            class.dir_name(),
            total,
            total / split::TEST_FRACTION_DENOMINATOR
        );
    }
}
