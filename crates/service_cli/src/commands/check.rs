//! Check command implementation
//!
//! Validates a contract file without printing a schedule.

use rent_core::schedule::calculate_month_difference;
use tracing::{info, warn};

use super::load_contract;
use crate::Result;

/// Summary of a validated contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Months from lease start to window end (negative if the window ends first).
    pub months_spanned: i32,
    /// Whether every generated record will be flagged vacant.
    pub vacant: bool,
}

/// Run the check command
pub fn run(contract_path: &str) -> Result<CheckReport> {
    info!("Checking contract: {}", contract_path);

    let contract = load_contract(contract_path)?;
    contract.validate()?;

    let months_spanned =
        calculate_month_difference(contract.window_end_date, contract.lease_start_date);
    if months_spanned < 0 {
        warn!(
            "Window ends {} month(s) before the lease starts; only the first month will be scheduled",
            -months_spanned
        );
    }
    if contract.window_end_date < contract.window_start_date {
        warn!(
            "Window end {} precedes window start {}",
            contract.window_end_date, contract.window_start_date
        );
    }

    let report = CheckReport {
        months_spanned,
        vacant: contract.is_vacant(),
    };
    println!("Contract OK");
    println!("  Lease start:      {}", contract.lease_start_date);
    println!(
        "  Window:           {} .. {}",
        contract.window_start_date, contract.window_end_date
    );
    println!("  Months spanned:   {}", report.months_spanned);
    println!("  Proration:        {}", contract.proration);
    println!("  Vacant:           {}", if report.vacant { "yes" } else { "no" });
    Ok(report)
}
