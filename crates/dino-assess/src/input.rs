use anyhow::{Context, Result};
use dino_core::{assess, assess_value, sample_records, AssessmentResult};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Sample,
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            None => Source::Sample,
            Some(p) if p == Path::new("-") => Source::Stdin,
            Some(p) => Source::File(p.to_path_buf()),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Sample => f.write_str("sample"),
            Source::Stdin => f.write_str("stdin"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn load(source: &Source) -> Result<AssessmentResult> {
    load_from(source, io::stdin())
}

/// Like `load`, with `stdin` standing in for the process's standard input.
pub fn load_from<R: Read>(source: &Source, mut stdin: R) -> Result<AssessmentResult> {
    let text = match source {
        Source::Sample => {
            let herd = sample_records();
            return Ok(assess(Some(herd.as_slice())));
        }
        Source::Stdin => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read records from stdin")?;
            buf
        }
        Source::File(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read records from {}", path.display()))?,
    };

    assess_text(&text).with_context(|| format!("invalid records in {source}"))
}

pub fn assess_text(text: &str) -> Result<AssessmentResult> {
    let value: Value = serde_json::from_str(text).context("input is not valid JSON")?;
    Ok(assess_value(&value)?)
}
