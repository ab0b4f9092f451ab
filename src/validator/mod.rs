mod accumulator;
mod report;
mod validator;

pub use accumulator::{Accumulator, Findings};
pub use report::LabelReport;
pub use validator::{absent_metrics, validate_label_set, Validator};
