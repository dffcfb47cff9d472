//! Invoice entity as served by the goahead REST API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::filter::SortDirection;

/// Payment status code with a display label for the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    ToPay,
    OverDue,
}

impl PaymentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "PAID",
            PaymentStatus::ToPay => "TO_PAY",
            PaymentStatus::OverDue => "OVER_DUE",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::ToPay => "To pay",
            PaymentStatus::OverDue => "Overdue",
        }
    }
}

/// Payment method code with a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    CashLate,
    Transfer,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::CashLate => "CASH_LATE",
            PaymentMethod::Transfer => "TRANSFER",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CashLate => "Deferred cash",
            PaymentMethod::Transfer => "Bank transfer",
        }
    }
}

/// Invoice document.
///
/// Dates cross the wire as ISO `YYYY-MM-DD` strings (date-only, no time
/// component); `NaiveDate` keeps the round trip free of timezone drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id_invoice: i64,
    pub id_customer: i64,
    /// Document number structured as `"<year>/<sequence>"`.
    pub invoice_number: String,
    pub sell_date: Option<NaiveDate>,
    pub invoice_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
    /// Payment deadline in days.
    pub payment_deadline: i32,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub other_info: String,
    #[serde(default)]
    pub invoice_items: Vec<InvoiceItem>,
    #[serde(default)]
    pub customer_name: String,
}

impl Invoice {
    /// Parse the document number into its numeric `(year, sequence)` pair.
    pub fn number_parts(&self) -> Option<(i32, u32)> {
        parse_document_number(&self.invoice_number)
    }

    /// Sum of all line-item totals.
    pub fn total_amount(&self) -> f64 {
        self.invoice_items.iter().map(InvoiceItem::total).sum()
    }
}

/// One invoice line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: i64,
    pub id_invoice: i64,
    pub name: String,
    /// Unit label ("pcs", "h", ...).
    pub jm: String,
    pub quantity: f64,
    pub amount: f64,
}

impl InvoiceItem {
    pub fn total(&self) -> f64 {
        self.quantity * self.amount
    }
}

/// Parse `"<year>/<sequence>"` into numbers. Returns `None` for anything
/// that does not match the two-part numeric shape.
pub fn parse_document_number(number: &str) -> Option<(i32, u32)> {
    let (year, sequence) = number.split_once('/')?;
    Some((year.trim().parse().ok()?, sequence.trim().parse().ok()?))
}

/// Compare two invoices by document number, numerically per
/// `(year, sequence)`. A string sort would place "2024/9" after
/// "2024/10"; this comparison does not. Unparseable numbers sort first.
pub fn compare_document_numbers(a: &Invoice, b: &Invoice) -> Ordering {
    a.number_parts().cmp(&b.number_parts())
}

/// Client-side re-sort applied after any sort-by-number fetch, overriding
/// whatever order the server returned.
pub fn sort_by_document_number(invoices: &mut [Invoice], direction: SortDirection) {
    invoices.sort_by(|a, b| match direction {
        SortDirection::Ascending => compare_document_numbers(a, b),
        SortDirection::Descending => compare_document_numbers(b, a),
    });
}
