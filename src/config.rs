use std::path::PathBuf;

use clap::Parser;

use crate::transliterate::Scheme;

/// Build the trvn tone recognition corpus from recorded words.
///
/// Run from the project root; every path defaults to the usual layout.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Recordings laid out as <source>/<speaker>/<diacritic>/<word>.wav
    #[arg(short, long, default_value = "wav")]
    pub source: PathBuf,
    /// Corpus root; receives wav/ and etc/
    #[arg(short, long, default_value = "trvn")]
    pub dest: PathBuf,

    #[arg(short, long, default_value = "words.txt")]
    pub words: PathBuf,
    #[arg(short, long, default_value = "words-blacklist.txt")]
    pub blacklist: PathBuf,

    #[arg(long, value_enum, default_value_t = Scheme::Vni)]
    pub scheme: Scheme,

    /// Seed for the train/test split; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not run the language model toolchain
    #[arg(long)]
    pub skip_lm: bool,
}

/// Where inputs are read from and outputs written to.
#[derive(Debug, Clone)]
pub struct CorpusLayout {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub words: PathBuf,
    pub blacklist: PathBuf,
}

impl CorpusLayout {
    pub fn wav_dir(&self) -> PathBuf {
        self.dest.join("wav")
    }

    pub fn etc_dir(&self) -> PathBuf {
        self.dest.join("etc")
    }

    pub fn etc_file(&self, name: &str) -> PathBuf {
        self.etc_dir().join(name)
    }
}

impl From<&Cli> for CorpusLayout {
    fn from(cli: &Cli) -> Self {
        CorpusLayout {
            source: cli.source.to_owned(),
            dest: cli.dest.to_owned(),
            words: cli.words.to_owned(),
            blacklist: cli.blacklist.to_owned(),
        }
    }
}
