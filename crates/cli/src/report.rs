//! Delivery note rendering.
//!
//! A note is three sections, always in this order: recipient, delivery, and
//! invoice. Each section is a header line followed by the record's details
//! snapshot in the configured [`OutputFormat`].

use std::io::Write;

use dnote_core::Snapshot;
use dnote_delivery::Delivery;
use dnote_invoicing::Invoice;
use dnote_parties::Customer;

use crate::config::OutputFormat;
use crate::error::ReportError;

pub const TITLE: &str = "Delivery Note";
pub const RECIPIENT_HEADER: &str = "Recipient Details:";
pub const DELIVERY_HEADER: &str = "Delivery Information:";
pub const ITEMS_HEADER: &str = "Summary of Items Delivered:";

/// Everything printed on one delivery note.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryNote<'a> {
    customer: &'a Customer,
    delivery: &'a Delivery,
    invoice: Invoice<'a>,
}

impl<'a> DeliveryNote<'a> {
    pub fn new(customer: &'a Customer, delivery: &'a Delivery, invoice: Invoice<'a>) -> Self {
        Self {
            customer,
            delivery,
            invoice,
        }
    }

    /// Write the full note to `out`.
    pub fn render<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<(), ReportError> {
        writeln!(out, "{TITLE}")?;
        writeln!(out, "{RECIPIENT_HEADER}")?;
        write_section(out, format, self.customer)?;

        writeln!(out)?;
        writeln!(out, "{DELIVERY_HEADER}")?;
        write_section(out, format, self.delivery)?;

        writeln!(out)?;
        writeln!(out, "{ITEMS_HEADER}")?;
        write_section(out, format, &self.invoice)?;

        tracing::debug!(
            %format,
            items = self.invoice.items().len(),
            total_charges = self.invoice.total_charges(),
            "delivery note rendered"
        );
        Ok(())
    }

    /// Render into a `String`.
    pub fn render_to_string(&self, format: OutputFormat) -> Result<String, ReportError> {
        let mut buf = Vec::new();
        self.render(&mut buf, format)?;
        Ok(String::from_utf8(buf)?)
    }
}

fn write_section<W: Write, S: Snapshot>(
    out: &mut W,
    format: OutputFormat,
    record: &S,
) -> Result<(), ReportError> {
    let details = record.snapshot();
    match format {
        OutputFormat::Text => writeln!(out, "{details}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &details)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
