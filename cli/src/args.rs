//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use conllulex_format::{JsonOptions, StoreConllulex};
use conllulex_session::ConvertOptions;
use conllulex_validate::ValidationOptions;

/// Corpus used when none is given.
pub const DEFAULT_CORPUS: &str = "pastrie";

#[derive(Parser, Debug)]
#[command(name = "conllulex")]
#[command(version, about = "Normalize and validate conllulex lexical-semantic annotation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill in missing columns and metadata of a sparse conllulex file.
    Enrich(EnrichArgs),
    /// Validate a conllulex file and convert it to JSON. Nothing is written
    /// when validation finds errors, unless --force is given. A `.json`
    /// input is re-read and written again under the given options.
    #[command(name = "to-json", alias = "conllulex2json")]
    ToJson(ToJsonArgs),
}

#[derive(Args, Debug)]
pub struct EnrichArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// The corpus the file belongs to
    #[arg(short, long, default_value = DEFAULT_CORPUS)]
    pub corpus: String,

    /// Comma-separated subtasks to run instead of the corpus's defaults
    #[arg(short = 'x', long)]
    pub subtasks: Option<String>,

    /// Append `!` to categories that need review
    #[arg(long)]
    pub mark_review: bool,
}

#[derive(Args, Debug)]
pub struct ToJsonArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// The corpus the file belongs to
    #[arg(short, long, default_value = DEFAULT_CORPUS)]
    pub corpus: String,

    /// Leave out FEATS, HEAD, DEPREL and DEPS
    #[arg(long)]
    pub no_include_morph_deps: bool,

    /// Leave out MISC
    #[arg(long)]
    pub no_include_misc: bool,

    /// Skip the UPOS/lexcat compatibility check
    #[arg(long)]
    pub no_validate_upos_lextag: bool,

    /// Skip lexlemma agreement and category vocabulary checks
    #[arg(long)]
    pub no_validate_type: bool,

    /// Store the rows in each record: none, full or toks
    #[arg(long, alias = "store-conllulex-string", default_value = "none")]
    pub store_conllulex: StoreConllulex,

    /// Replace mismatched `mwe` metadata instead of reporting it
    #[arg(long)]
    pub override_mwe_render: bool,

    /// Write output even when validation finds errors
    #[arg(long)]
    pub force: bool,

    /// JSON object of supersense replacements applied to the output
    #[arg(long, value_name = "FILE")]
    pub ss_map: Option<PathBuf>,
}

impl ToJsonArgs {
    pub fn convert_options(&self) -> ConvertOptions {
        let json = JsonOptions::default()
            .with_morph_deps(!self.no_include_morph_deps)
            .with_misc(!self.no_include_misc)
            .with_store(self.store_conllulex);
        let validation = ValidationOptions::default()
            .with_validate_type(!self.no_validate_type)
            .with_validate_upos_lextag(!self.no_validate_upos_lextag);
        ConvertOptions::default()
            .with_json(json)
            .with_validation(validation)
            .with_override_mwe_render(self.override_mwe_render)
            .with_force(self.force)
    }
}
