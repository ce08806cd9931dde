use crate::generate::Corpus;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use promocheck_types::Code;
use std::fs::File;
use std::io::{BufWriter, Write};

pub const CAMPAIGN_FILE: &str = "campaign_codes.txt";
pub const MEMBERSHIP_FILE: &str = "membership_codes.txt";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorpusPaths {
    pub campaign: Utf8PathBuf,
    pub membership: Utf8PathBuf,
}

/// Write `corpus` into `dir` (created if missing) as two one-code-per-line files.
pub fn write_corpus(corpus: &Corpus, dir: &Utf8Path) -> anyhow::Result<CorpusPaths> {
    std::fs::create_dir_all(dir).with_context(|| format!("create directory: {}", dir))?;

    let paths = CorpusPaths {
        campaign: dir.join(CAMPAIGN_FILE),
        membership: dir.join(MEMBERSHIP_FILE),
    };
    write_codes(&paths.campaign, &corpus.campaign)?;
    write_codes(&paths.membership, &corpus.membership)?;
    Ok(paths)
}

fn write_codes(path: &Utf8Path, codes: &[Code]) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path))?;
    let mut out = BufWriter::new(file);
    for code in codes {
        writeln!(out, "{code}").with_context(|| format!("write {}", path))?;
    }
    out.flush().with_context(|| format!("flush {}", path))?;
    tracing::debug!(%path, codes = codes.len(), "wrote code file");
    Ok(())
}
