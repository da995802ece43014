pub mod io;
pub mod page;
pub mod rendering;
pub mod theme;

// Re-export key types for easier usage
pub use io::{IoError, read_markdown, write_html};
pub use page::{document_title, standalone_page};
pub use rendering::render;
