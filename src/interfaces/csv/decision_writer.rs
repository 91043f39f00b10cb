use crate::application::selection::ProcessingOutcome;
use crate::domain::payment::PaymentId;
use crate::domain::provider::PaymentProvider;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One output row. `reference` is empty for dry runs.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DecisionRecord {
    pub payment: PaymentId,
    pub provider: PaymentProvider,
    pub reference: String,
}

impl From<ProcessingOutcome> for DecisionRecord {
    fn from(outcome: ProcessingOutcome) -> Self {
        Self {
            payment: outcome.payment_id,
            provider: outcome.provider,
            reference: outcome.receipt.reference,
        }
    }
}

impl DecisionRecord {
    pub fn selected(payment: PaymentId, provider: PaymentProvider) -> Self {
        Self {
            payment,
            provider,
            reference: String::new(),
        }
    }
}

/// Writes routing decisions as CSV with a `payment,provider,reference` header.
pub struct DecisionWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> DecisionWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, record: &DecisionRecord) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes routing decisions as JSON lines, one object per decision.
pub struct JsonDecisionWriter<W: Write> {
    sink: W,
}

impl<W: Write> JsonDecisionWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write(&mut self, record: &DecisionRecord) -> Result<()> {
        serde_json::to_writer(&mut self.sink, record)?;
        writeln!(self.sink)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}
