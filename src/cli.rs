//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

use anchorfix::core::logging;
use anchorfix::{rewrite_html_file, RewriteOptions, DEFAULT_PREFIX};

/// anchorfix - renumber HTML anchors and fix same-document links.
#[derive(Parser, Debug)]
#[command(name = "anchorfix")]
#[command(
    author,
    version,
    about,
    long_about = r##"anchorfix rewrites anchor identifiers in an HTML file into sequential,
zero-padded ids and updates every same-document link to match.

Anchors are <h1>..<h6> elements with an id and <a> elements with a name.
Links of the form href="#..." are rewritten; links with a path before the '#'
(other.html#x, https://example.com#x) are left untouched.

The rewritten document is printed to stdout. If any identifier is used by
more than one anchor, nothing is printed and every offending line is reported.

Examples:
    anchorfix page.html > fixed.html
    anchorfix page.html --prefix sec
    anchorfix page.html --mapping
"##
)]
pub struct Cli {
    /// HTML file to rewrite (UTF-8, Shift-JIS or CP932).
    #[arg(value_name = "HTMLFILE")]
    pub file: PathBuf,

    /// Prefix for generated identifiers.
    #[arg(
        long,
        default_value = DEFAULT_PREFIX,
        value_name = "PREFIX",
        long_help = "Text placed in front of every generated ordinal.\n\n\
With the default prefix the anchors become a0001, a0002, ...\n\
Allowed characters: letters, digits, '_', '-', '.' and ':'."
    )]
    pub prefix: String,

    /// Only rewrite links whose fragment matches an anchor exactly.
    #[arg(
        long,
        long_help = "Disable the fallback match for links whose fragment has no exact\n\
anchor. By default such fragments are percent-decoded and stripped of\n\
punctuation, and rewritten when exactly one anchor matches in that form."
    )]
    pub exact_fragments: bool,

    /// Print the identifier mapping as JSON Lines instead of the document.
    #[arg(
        long,
        long_help = "Print one JSON object per anchor (line, tag, attribute, original,\n\
assigned) instead of the rewritten document."
    )]
    pub mapping: bool,

    /// Disable colored error output.
    #[arg(long)]
    pub no_color: bool,

    /// Print diagnostics to stderr.
    #[arg(
        short,
        long,
        long_help = "Print diagnostics (detected encoding, rewrite totals, dangling\n\
links) to stderr. RUST_LOG overrides the level."
    )]
    pub verbose: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose, !cli.no_color);

    let mut options = RewriteOptions::with_prefix(cli.prefix);
    if cli.exact_fragments {
        options = options.exact_fragments();
    }

    let report = rewrite_html_file(&cli.file, &options)?;

    debug!(
        anchors = report.assignments.len(),
        links = report.links_rewritten,
        dangling = report.dangling_links.len(),
        "rewrote document"
    );
    for fragment in &report.dangling_links {
        debug!(fragment = %fragment, "link has no matching anchor");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.mapping {
        for assignment in &report.assignments {
            writeln!(out, "{}", serde_json::to_string(assignment)?)?;
        }
    } else {
        out.write_all(report.html.as_bytes())?;
    }
    out.flush()?;

    Ok(())
}
