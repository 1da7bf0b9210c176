//! CSV rendering of handled samples.
//!
//! One header line, then one line per handled sample. Prices are printed
//! with nine significant digits.

use std::io::{self, Write};
use tickema_core::OutputRow;

pub const CSV_HEADER: &str = "timestamp_us,bid,ask,price,mid_ema,price_ema";

/// Significant digits used for every price column.
pub const PRICE_DIGITS: usize = 9;

/// Writes the output table.
pub struct CsvWriter<W: Write> {
    out: W,
    rows_written: u64,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            rows_written: 0,
        }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{CSV_HEADER}")
    }

    pub fn write_row(&mut self, row: &OutputRow) -> io::Result<()> {
        writeln!(
            self.out,
            "{},{},{},{},{},{}",
            row.timestamp_us,
            format_significant(row.bid, PRICE_DIGITS),
            format_significant(row.ask, PRICE_DIGITS),
            format_significant(row.price, PRICE_DIGITS),
            format_significant(row.mid_ema, PRICE_DIGITS),
            format_significant(row.price_ema, PRICE_DIGITS),
        )?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Fixed-point rendering with `digits` significant digits.
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1) as i32;
    let decimals = if value == 0.0 || !value.is_finite() {
        digits - 1
    } else {
        let magnitude = value.abs().log10().floor() as i32;
        (digits - 1 - magnitude).max(0)
    };
    format!("{value:.prec$}", prec = decimals as usize)
}
