use log::{debug, error, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use crate::cli::types::Commands;
use crate::pipeline;
use crate::styles;
use crate::toc::types::{parse_tag_list, TocOptions};
use crate::utils::error::{BoxResult, OutlinerError};

/// Handle the process command
pub fn handle_process_command(command: &Commands) {
    let Commands::Process {
        input,
        output,
        tags,
        title,
        no_styles,
        headings_json,
        secondary,
    } = command;

    let result = run_process(
        input.as_ref(),
        output.as_ref(),
        tags,
        title,
        *no_styles,
        headings_json.as_ref(),
        *secondary,
    );

    match result {
        Ok(expanded) => info!("Processed document, expanded {} outline marker(s)", expanded),
        Err(e) => {
            error!("Failed to process document: {}", e);
            std::process::exit(1);
        }
    }
}

/// Process stdin to stdout with default options
pub fn handle_default_command() {
    if let Err(e) = run_process(
        None,
        None,
        "h2,h3",
        "Table of Contents",
        false,
        None,
        false,
    ) {
        error!("Failed to process document: {}", e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn run_process(
    input: Option<&PathBuf>,
    output: Option<&PathBuf>,
    tags: &str,
    title: &str,
    no_styles: bool,
    headings_json: Option<&PathBuf>,
    secondary: bool,
) -> BoxResult<usize> {
    let content = match input {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            OutlinerError::Generic(format!("Failed to read {}: {}", path.display(), e))
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let defaults = TocOptions {
        allowed_tags: parse_tag_list(tags),
        title: title.to_string(),
    };

    let processed = pipeline::process(&content, !secondary, &defaults)?;

    if let Some(path) = headings_json {
        let json = serde_json::to_string_pretty(&processed.items)?;
        fs::write(path, json).map_err(|e| {
            OutlinerError::Generic(format!("Failed to write {}: {}", path.display(), e))
        })?;
        debug!(
            "Wrote {} heading record(s) to {}",
            processed.items.len(),
            path.display()
        );
    }

    // Styles are only worth carrying when an outline was actually expanded
    let html = if processed.expanded > 0 && !no_styles {
        styles::inject_styles(&processed.html)
    } else {
        processed.html
    };

    match output {
        Some(path) => fs::write(path, html).map_err(|e| {
            OutlinerError::Generic(format!("Failed to write {}: {}", path.display(), e))
        })?,
        None => io::stdout().write_all(html.as_bytes())?,
    }

    Ok(processed.expanded)
}
