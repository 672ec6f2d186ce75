pub mod renderer;
pub mod scanner;
pub mod types;

pub use renderer::render_outline;
pub use scanner::scan_headings;
pub use types::{HeadingTag, TocItem, TocOptions};
