//! Subcommand execution.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use conllulex_format::{parse_sentences, read_documents, RowWriter, SupersenseMap};
use conllulex_session::{Session, Subtask};
use tracing::info;

use crate::args::{Cli, Command, EnrichArgs, ToJsonArgs};
use crate::error::{CliError, CliResult};
use crate::report::format_report;

fn read(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|e| CliError::read(path, e))
}

fn write(path: &Path, contents: &str) -> CliResult<()> {
    fs::write(path, contents).map_err(|e| CliError::write(path, e))
}

/// Run the parsed command. Exit status 1 means findings kept output from
/// being written.
pub fn run(cli: &Cli) -> CliResult<ExitCode> {
    match &cli.command {
        Command::Enrich(args) => {
            enrich(args)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::ToJson(args) => {
            let written = to_json(args)?;
            Ok(if written { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

pub fn enrich(args: &EnrichArgs) -> CliResult<()> {
    let session = Session::for_corpus(&args.corpus)?;
    let mut sentences = parse_sentences(&read(&args.input)?)?;

    let summary = match &args.subtasks {
        Some(list) => session.enrich_with(&mut sentences, &Subtask::parse_list(list)?)?,
        None => session.enrich(&mut sentences)?,
    };

    if !summary.findings.is_empty() {
        print!("{}", format_report(&summary.findings, true));
    }

    let writer = RowWriter::new().with_review_marks(args.mark_review);
    write(&args.output, &writer.write_sentences(&sentences))?;
    info!(
        output = %args.output.display(),
        sentences = summary.sentences,
        "wrote enriched rows"
    );
    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Returns whether output was written. Findings are printed first.
///
/// A `.json` input holds documents from an earlier conversion; they are
/// re-read rather than parsed as rows.
pub fn to_json(args: &ToJsonArgs) -> CliResult<bool> {
    let session = Session::for_corpus(&args.corpus)?;
    let mut options = args.convert_options();
    if let Some(path) = &args.ss_map {
        options = options.with_ss_map(SupersenseMap::from_json(&read(path)?)?);
    }

    let text = read(&args.input)?;
    let (conversion, sentences) = if is_json(&args.input) {
        let documents = read_documents(&text)?;
        (session.convert_documents(&documents, &options)?, documents.len())
    } else {
        let mut sentences = parse_sentences(&text)?;
        (session.convert(&mut sentences, &options)?, sentences.len())
    };
    if !conversion.findings.is_empty() {
        print!("{}", format_report(&conversion.findings, conversion.is_written()));
    }

    let Some(output) = &conversion.output else {
        return Ok(false);
    };
    write(&args.output, output)?;
    info!(output = %args.output.display(), sentences, "wrote JSON");
    Ok(true)
}
