//! Schedule command implementation
//!
//! Builds the rent schedule for a contract file and prints it.

use std::io::Write;

use rent_core::{calculate_monthly_rent, MonthlyRentRecords, ProrationConvention};
use tracing::info;

use super::load_contract;
use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Run the schedule command
pub fn run(contract_path: &str, proration: Option<&str>, config: &CliConfig) -> Result<()> {
    info!("Building rent schedule...");
    info!("  Contract: {}", contract_path);
    info!("  Output format: {}", config.output_format);

    let mut contract = load_contract(contract_path)?;
    if let Some(name) = proration {
        let convention: ProrationConvention = name.parse().map_err(CliError::InvalidArgument)?;
        contract = contract.with_proration(convention);
    }
    info!("  Proration: {}", contract.proration);

    let mut records = calculate_monthly_rent(&contract)?;
    if config.window_only {
        records = records.within_window(contract.window_start_date, contract.window_end_date);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&records, config.output_format, &mut out)?;
    out.flush()?;

    info!(records = records.len(), total = records.total_due(), "Schedule complete");
    Ok(())
}

/// Write `records` to `out` in the requested format.
pub fn render<W: Write>(records: &MonthlyRentRecords, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => render_table(records, out)?,
    }
    Ok(())
}

fn render_table<W: Write>(records: &MonthlyRentRecords, out: &mut W) -> Result<()> {
    writeln!(out, "┌──────┬────────────┬──────────────┬────────┐")?;
    writeln!(out, "│ #    │ Due Date   │ Rent         │ Vacant │")?;
    writeln!(out, "├──────┼────────────┼──────────────┼────────┤")?;
    if records.is_empty() {
        writeln!(out, "│ (no records)                            │")?;
    }
    for (i, record) in records.iter().enumerate() {
        writeln!(
            out,
            "│ {:<4} │ {} │ {:>12.2} │ {:<6} │",
            i + 1,
            record.rent_due_date(),
            record.rent_amount(),
            if record.vacancy() { "yes" } else { "no" }
        )?;
    }
    writeln!(out, "├──────┴────────────┼──────────────┼────────┤")?;
    writeln!(out, "│ Total             │ {:>12.2} │        │", records.total_due())?;
    writeln!(out, "└───────────────────┴──────────────┴────────┘")?;
    Ok(())
}
