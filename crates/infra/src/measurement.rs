pub mod measurer;
pub mod strategies;

pub use measurer::Utf8LineCounter;
pub use strategies::count_text_lines;
