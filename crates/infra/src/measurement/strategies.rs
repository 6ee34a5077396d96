pub mod byte_based;

pub use byte_based::count_text_lines;
