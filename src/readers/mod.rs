pub mod sample_reader;

pub use sample_reader::{SampleReader, ValueIterator};
