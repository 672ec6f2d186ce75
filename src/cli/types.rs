use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "outliner")]
#[command(about = "Server-side table of contents generator for rendered HTML", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Process a rendered HTML document: assign heading anchors and expand
    /// [outline] markers
    #[command(alias = "p")]
    Process {
        /// Input file (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (writes stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Default heading tags to include in the outline
        #[arg(long, value_name = "TAGS", default_value = "h2,h3")]
        tags: String,

        /// Default outline title (an empty string disables the title block)
        #[arg(long, value_name = "TITLE", default_value = "Table of Contents")]
        title: String,

        /// Skip injecting the outline style block into the document head
        #[arg(long, default_value_t = false)]
        no_styles: bool,

        /// Write the collected heading records to a JSON file
        #[arg(long, value_name = "FILE")]
        headings_json: Option<PathBuf>,

        /// Treat the document as a secondary render (headings are not scanned
        /// and markers are left in place)
        #[arg(long, default_value_t = false)]
        secondary: bool,
    },
}
