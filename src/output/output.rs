use std::io::Write;

use super::encoder::Encoder;
use super::writer::Writer;
use crate::error::Result;
use crate::suite::Outcome;

pub struct Output<W: Write> {
    writer: Box<dyn Writer<W>>,
    encoder: Box<dyn Encoder>,
}

impl<W: Write> Output<W> {
    pub fn new(writer: Box<dyn Writer<W>>, encoder: Box<dyn Encoder>) -> Self {
        Self { writer, encoder }
    }

    pub fn write(&mut self, outcome: &Outcome) -> Result<()> {
        let buf = self.encoder.encode(outcome)?;

        self.writer
            .write(&buf)
            .map_err(|e| ("writer failed", e))?;

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}
