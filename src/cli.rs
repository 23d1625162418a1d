//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "conll-align",
    about = "realigns two parallel CoNLL files at the sentence level."
)]
/// Realign command and parameters.
///
/// ```sh
/// conll-align 0.1.0
/// realigns two parallel CoNLL files at the sentence level.
///
/// USAGE:
///     conll-align --sl <sl> --tl <tl> --out <out> [--aligner <aligner>]
///
/// FLAGS:
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// OPTIONS:
///         --aligner <aligner>    sentence aligner command [default: bertalign]
///         --out <out>            prefix for output files
///         --sl <sl>              path to the source language CoNLL file
///         --tl <tl>              path to the target language CoNLL file
/// ```
pub struct ConllAlign {
    #[structopt(
        long = "sl",
        parse(from_os_str),
        help = "path to the source language CoNLL file"
    )]
    pub sl: PathBuf,
    #[structopt(
        long = "tl",
        parse(from_os_str),
        help = "path to the target language CoNLL file"
    )]
    pub tl: PathBuf,
    #[structopt(long = "out", help = "prefix for output files")]
    pub out: String,
    #[structopt(
        long = "aligner",
        help = "sentence aligner command (JSON request on stdin, alignment pairs on stdout)",
        default_value = "bertalign"
    )]
    pub aligner: String,
}
