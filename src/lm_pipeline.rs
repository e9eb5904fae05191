use std::{
    fs::File,
    io,
    path::Path,
    process::{Command, ExitStatus, Stdio},
};

use crate::{
    config::CorpusLayout,
    error::{io_at, CorpusError, CorpusResult},
    manifest::write_lines,
};

const TEXT2WFREQ: &str = "text2wfreq";
const WFREQ2VOCAB: &str = "wfreq2vocab";
const TEXT2IDNGRAM: &str = "text2idngram";
const IDNGRAM2LM: &str = "idngram2lm";
const LM_CONVERT: &str = "sphinx_lm_convert";
const JSGF2FSG: &str = "sphinx_jsgf2fsg";

/// Builds `etc/trvn.lm.DMP` from the label text with the CMU-Cambridge toolkit.
///
/// Intermediate files live in a temporary directory that is removed on return,
/// whether or not the tools succeed.
pub fn build_language_model(labels: &[String], layout: &CorpusLayout) -> CorpusResult<()> {
    let tmp = tempfile::Builder::new()
        .prefix("diacritics")
        .tempdir()
        .map_err(io_at(std::env::temp_dir()))?;
    let text = tmp.path().join("diacritics.txt");
    let vocab = tmp.path().join("diacritics.vocab");
    let idngram = tmp.path().join("diacritics.idngram");
    let arpa = tmp.path().join("diacritics.arpa");

    write_lines(&text, labels)?;

    word_frequency_vocab(&text, &vocab)?;
    run(
        TEXT2IDNGRAM,
        Command::new(TEXT2IDNGRAM)
            .arg("-vocab")
            .arg(&vocab)
            .arg("-idngram")
            .arg(&idngram)
            .stdin(open(&text)?),
    )?;
    run(
        IDNGRAM2LM,
        Command::new(IDNGRAM2LM)
            .args(["-vocab_type", "0"])
            .arg("-idngram")
            .arg(&idngram)
            .arg("-vocab")
            .arg(&vocab)
            .arg("-arpa")
            .arg(&arpa),
    )?;
    run(
        LM_CONVERT,
        Command::new(LM_CONVERT)
            .arg("-i")
            .arg(&arpa)
            .arg("-o")
            .arg(layout.etc_file("trvn.lm.DMP")),
    )?;

    tmp.close().map_err(io_at(std::env::temp_dir()))
}

/// Compiles `etc/trvn.jsgf` into `etc/trvn.fsg`.
pub fn compile_grammar(layout: &CorpusLayout) -> CorpusResult<()> {
    run(
        JSGF2FSG,
        Command::new(JSGF2FSG)
            .arg("-jsgf")
            .arg(layout.etc_file("trvn.jsgf"))
            .arg("-fsg")
            .arg(layout.etc_file("trvn.fsg")),
    )
}

/// `text2wfreq < text | wfreq2vocab > vocab`
fn word_frequency_vocab(text: &Path, vocab: &Path) -> CorpusResult<()> {
    tracing::info!(
        "Running {} < {} | {} > {}",
        TEXT2WFREQ,
        text.display(),
        WFREQ2VOCAB,
        vocab.display()
    );
    let vocab_file = File::create(vocab).map_err(io_at(vocab))?;
    let mut wfreq = Command::new(TEXT2WFREQ)
        .stdin(open(text)?)
        .stdout(Stdio::piped())
        .spawn()
        .map_err(spawn_error(TEXT2WFREQ))?;
    let frequencies = wfreq.stdout.take().ok_or_else(|| CorpusError::ToolSpawn {
        tool: TEXT2WFREQ,
        source: io::Error::new(io::ErrorKind::BrokenPipe, "stdout was not captured"),
    })?;

    let vocab_status = Command::new(WFREQ2VOCAB)
        .stdin(frequencies)
        .stdout(vocab_file)
        .status()
        .map_err(spawn_error(WFREQ2VOCAB));
    let wfreq_status = wfreq.wait().map_err(spawn_error(TEXT2WFREQ))?;

    check(TEXT2WFREQ, wfreq_status)?;
    check(WFREQ2VOCAB, vocab_status?)
}

fn open(path: &Path) -> CorpusResult<File> {
    File::open(path).map_err(io_at(path))
}

/// Runs a tool to completion with inherited stderr; a nonzero exit is an error.
fn run(tool: &'static str, cmd: &mut Command) -> CorpusResult<()> {
    tracing::info!("Running {:?}", cmd);
    let status = cmd.status().map_err(spawn_error(tool))?;
    check(tool, status)
}

fn check(tool: &'static str, status: ExitStatus) -> CorpusResult<()> {
    if status.success() {
        Ok(())
    } else {
        Err(CorpusError::ToolFailed { tool, status })
    }
}

fn spawn_error(tool: &'static str) -> impl FnOnce(io::Error) -> CorpusError {
    move |source| CorpusError::ToolSpawn { tool, source }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_cannot_be_spawned() {
        let err = run("no-such-tool", &mut Command::new("words2trvn-no-such-tool")).unwrap_err();
        assert!(matches!(err, CorpusError::ToolSpawn { tool: "no-such-tool", .. }));
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_is_checked() {
        assert!(run("true", &mut Command::new("true")).is_ok());
        let err = run("false", &mut Command::new("false")).unwrap_err();
        assert!(matches!(err, CorpusError::ToolFailed { tool: "false", .. }));
        assert!(err.to_string().starts_with("`false` exited with"));
    }

    #[cfg(unix)]
    #[test]
    fn stdin_is_fed_from_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, "<s> ACUTE </s>\n")?;

        run(
            "cat",
            Command::new("cat")
                .stdin(open(&input)?)
                .stdout(File::create(&output)?),
        )?;
        assert_eq!(std::fs::read_to_string(output)?, "<s> ACUTE </s>\n");
        Ok(())
    }
}
