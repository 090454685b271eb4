pub mod input;
pub mod output;

pub use input::read_answer_file;
pub use output::{create_writer, OutputFormat, OutputWriter};
