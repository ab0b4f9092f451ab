use std::collections::BTreeSet;

use crate::error::Result;
use crate::model::{MetricName, ObservedData};

/// Fetches and parses the metrics of one component.
///
/// Metric names the grabber cannot associate with any known schema are
/// added to `unknown`. Transport and format errors are returned before any
/// validation happens.
pub trait Grabber {
    fn grab(&mut self, unknown: &mut BTreeSet<MetricName>) -> Result<ObservedData>;
}

impl<G: Grabber + ?Sized> Grabber for Box<G> {
    fn grab(&mut self, unknown: &mut BTreeSet<MetricName>) -> Result<ObservedData> {
        (**self).grab(unknown)
    }
}
