pub mod operations;

pub use operations::{read_text, write_text};
