use crate::error::Result;
use crate::suite::Outcome;

pub trait Encoder {
    fn encode(&self, outcome: &Outcome) -> Result<Vec<u8>>;
}
