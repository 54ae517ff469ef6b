//! CSV export of the expense ledger
//!
//! Writes `Date,Category,Amount` followed by one row per expense in ledger
//! (insertion) order. There is no matching import.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::session::Ledger;

/// Header row of the expense export
pub const EXPENSES_CSV_HEADER: [&str; 3] = ["Date", "Category", "Amount"];

/// Write every ledger record as CSV
pub fn export_expenses_csv<W: Write>(ledger: &Ledger, writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(EXPENSES_CSV_HEADER)?;

    for record in ledger.records() {
        csv_writer.write_record([
            record.date().format("%Y-%m-%d").to_string(),
            record.category().name().to_string(),
            record.amount().to_decimal_string(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_export_keeps_ledger_order() {
        let mut ledger = Ledger::new();
        ledger.add_expense(date(2024, 1, 5), Category::Food, Money::from_dollars(20));
        ledger.add_expense(date(2024, 3, 1), Category::Rent, Money::from_cents(90050));
        ledger.add_expense(date(2024, 1, 1), Category::Transport, Money::from_dollars(10));

        let mut output = Vec::new();
        export_expenses_csv(&ledger, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert_eq!(
            csv_string,
            "Date,Category,Amount\n\
             2024-01-05,Food,20.00\n\
             2024-03-01,Rent,900.50\n\
             2024-01-01,Transport,10.00\n"
        );
    }

    #[test]
    fn test_row_count_matches_ledger() {
        let mut ledger = Ledger::new();
        for day in 1..=12 {
            ledger.add_expense(date(2024, 5, day), Category::Utilities, Money::from_cents(1));
        }

        let mut output = Vec::new();
        export_expenses_csv(&ledger, &mut output).unwrap();

        let mut reader = csv::Reader::from_reader(output.as_slice());
        assert_eq!(reader.headers().unwrap(), vec!["Date", "Category", "Amount"]);
        assert_eq!(reader.records().count(), ledger.len());
    }

    #[test]
    fn test_empty_ledger_is_header_only() {
        let mut output = Vec::new();
        export_expenses_csv(&Ledger::new(), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Date,Category,Amount\n");
    }
}
