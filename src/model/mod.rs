mod data;
mod labels;
mod sample;
mod types;

pub use data::*;
pub use labels::*;
pub use sample::*;
pub use types::*;
