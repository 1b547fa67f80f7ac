pub mod dataset;
pub mod sample;

pub use dataset::DataSet;
pub use sample::sample_dataset;
