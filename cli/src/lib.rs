pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod utils;

// Re-export commonly used items
pub use app::SongwalkApp;
pub use args::Args;
pub use utils::format_number;
