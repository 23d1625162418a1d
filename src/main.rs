//! # conll-align
//!
//! Realigns two parallel annotated token files (CoNLL format) so that their
//! sentence boundaries match, following a sentence alignment computed by an
//! external aligner.
//!
//! ## Getting started
//!
//! ```sh
//! conll-align --sl en.conll --tl fr.conll --out corpus/run1
//! ```
//!
//! writes `corpus/run1_aligned_en.conll` and
//! `corpus/run1_aligned_fr.conll`, one merged sentence per alignment
//! group on each side.
use conll_align::align::ProcessAligner;
use conll_align::error::Error;
use conll_align::pipelines::{AlignConll, Pipeline};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::ConllAlign::from_args();
    debug!("cli args\n{:#?}", opt);

    let aligner = ProcessAligner::new(&opt.aligner);
    let pipeline = AlignConll::new(opt.sl, opt.tl, opt.out, aligner);
    pipeline.run()?;

    Ok(())
}
