use std::collections::HashMap;

pub type LabelName = String;

pub type LabelValue = String;

pub type Labels = HashMap<LabelName, LabelValue>;

pub const NAME_LABEL: &str = "__name__";

// Labels starting with this prefix are reserved for internal use.
pub const INTERNAL_LABEL_PREFIX: &str = "__";

#[inline]
pub fn is_internal_label(name: &str) -> bool {
    name.starts_with(INTERNAL_LABEL_PREFIX)
}
