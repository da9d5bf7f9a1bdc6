pub mod processor;

pub use crate::config::ProcessorMap;
pub use processor::Processor;
