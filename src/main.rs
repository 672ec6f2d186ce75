// Module declarations
mod cli;
mod pipeline;
mod shortcode;
mod styles;
mod toc;
mod utils;

fn main() {
    // Run the CLI
    cli::run();
}
