use std::io::Write;

use crate::error::Result;
use crate::grabber::Grabber;
use crate::output::Output;
use crate::schema::ComponentKind;
use crate::suite::{Outcome, Suite};

// Grabber -> Suite(role gate -> ConformanceChecker) -> (Encoder -> Writer)
//
// Grabber            == dump             ->  ObservedData + unknown metrics
// ConformanceChecker == ObservedData     ->  Findings
// Suite              == Findings         ->  Outcome(Passed | Failed | Skipped)
// Encoder            == Outcome          ->  Vec<u8>
// Writer             == Vec<u8>          ->  stdout
pub struct Runner<'a, W: Write> {
    kind: ComponentKind,
    grabber: Box<dyn Grabber + 'a>,
    suite: Suite<'a>,
    output: Output<W>,
}

impl<'a, W: Write> Runner<'a, W> {
    pub fn new(
        kind: ComponentKind,
        grabber: Box<dyn Grabber + 'a>,
        suite: Suite<'a>,
        output: Output<W>,
    ) -> Self {
        Self {
            kind,
            grabber,
            suite,
            output,
        }
    }

    pub fn run(&mut self) -> Result<Outcome> {
        let outcome = self.suite.run(self.kind, &mut self.grabber)?;
        self.output.write(&outcome)?;
        Ok(outcome)
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}
