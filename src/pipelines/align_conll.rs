/*! Realignment pipeline

Parses both annotated files, hands their sentence texts to the external
aligner, then rebuilds each side along the alignment groups and writes the
two output files.

# Processing
1. Each input file is parsed into its ordered sentence records.
1. Sentence texts (tokens joined by spaces) are newline-joined and passed to
   the aligner, which returns the raw index groups.
1. Raw indices are normalized to plain integers at the boundary.
1. For every alignment pair, both sides merge their group into one sentence.
1. The merged sides are written to `<prefix>_aligned_en.conll` and
   `<prefix>_aligned_fr.conll`.

A failure at any step aborts the run; earlier steps leave no output, a
failure between the two writes may leave a single file behind.

!*/
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::align::{merge, normalize, Aligner};
use crate::conll::{reader, writer, Document, MergedSentence};
use crate::error::Error;
use crate::pipelines::pipeline::Pipeline;

pub struct AlignConll<A> {
    sl: PathBuf,
    tl: PathBuf,
    out_prefix: String,
    aligner: A,
}

impl<A> AlignConll<A>
where
    A: Aligner,
{
    pub fn new(sl: PathBuf, tl: PathBuf, out_prefix: String, aligner: A) -> Self {
        Self {
            sl,
            tl,
            out_prefix,
            aligner,
        }
    }

    /// source-side output path. Suffix is fixed, not derived from a
    /// language code.
    pub fn source_dst(&self) -> PathBuf {
        PathBuf::from(format!("{}_aligned_en.conll", self.out_prefix))
    }

    /// target-side output path.
    pub fn target_dst(&self) -> PathBuf {
        PathBuf::from(format!("{}_aligned_fr.conll", self.out_prefix))
    }

    fn read(path: &Path) -> Result<Document, Error> {
        debug!("reading {:?}", path);
        reader::from_path(path)
    }
}

impl<A> Pipeline<()> for AlignConll<A>
where
    A: Aligner,
{
    fn run(&self) -> Result<(), Error> {
        let source = Self::read(&self.sl)?;
        let target = Self::read(&self.tl)?;
        info!(
            "aligning {} source against {} target sentences",
            source.len(),
            target.len()
        );

        let raw = self
            .aligner
            .align(
                &source.sentence_texts().join("\n"),
                &target.sentence_texts().join("\n"),
            )?;
        let alignment = normalize(raw)?;
        debug!("alignment holds {} pairs", alignment.len());

        let mut aligned_source: Vec<MergedSentence> = Vec::with_capacity(alignment.len());
        let mut aligned_target: Vec<MergedSentence> = Vec::with_capacity(alignment.len());
        for pair in &alignment {
            aligned_source.push(merge(&source, &pair.source)?);
            aligned_target.push(merge(&target, &pair.target)?);
        }

        writer::write(&aligned_source, &self.source_dst())?;
        writer::write(&aligned_target, &self.target_dst())?;
        info!(
            "wrote {:?} and {:?}",
            self.source_dst(),
            self.target_dst()
        );
        Ok(())
    }
}
