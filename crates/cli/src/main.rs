use std::io::Write;

use anyhow::Context;

use dnote_cli::{DeliveryNote, ReportConfig, demo};
use dnote_invoicing::Invoice;

fn main() -> anyhow::Result<()> {
    dnote_observability::init();

    let config = ReportConfig::from_env();

    let customer = demo::sample_customer();
    let delivery = demo::sample_delivery();
    let items = demo::sample_items();
    let invoice = Invoice::new(&items, demo::SAMPLE_TAXES_AND_FEES);

    let note = DeliveryNote::new(&customer, &delivery, invoice);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    note.render(&mut out, config.format).context("failed to write delivery note")?;
    out.flush().context("failed to flush stdout")?;

    tracing::info!(format = %config.format, "delivery note written");
    Ok(())
}
