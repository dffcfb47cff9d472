//! Filter and sort descriptors translated into paged-query parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Match mode attached to a filter value by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMode {
    Equals,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    DateIs,
    DateBefore,
    DateAfter,
}

impl MatchMode {
    /// Server-side comparison type for date filters. Unmapped modes fall
    /// back to EQUALS.
    pub fn date_comparison_type(&self) -> &'static str {
        match self {
            MatchMode::DateBefore | MatchMode::LessThan => "BEFORE",
            MatchMode::DateAfter | MatchMode::GreaterThan => "AFTER",
            _ => "EQUALS",
        }
    }

    /// Server-side comparison type for amount filters. Unmapped modes
    /// fall back to EQUALS.
    pub fn amount_comparison_type(&self) -> &'static str {
        match self {
            MatchMode::LessThan => "LESS_THAN",
            MatchMode::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            MatchMode::GreaterThan => "GREATER_THAN",
            MatchMode::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            _ => "EQUALS",
        }
    }
}

/// Date predicate: value plus how to compare it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFilter {
    pub value: NaiveDate,
    pub mode: MatchMode,
}

/// Amount predicate: value plus how to compare it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountFilter {
    pub value: f64,
    pub mode: MatchMode,
}

/// Accumulated filter criteria for the invoice list.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilters {
    /// Free-text search across all columns.
    pub global: Option<String>,
    /// Selected customer ids. Only the first one reaches the server;
    /// multi-select customer filtering is not supported server-side.
    pub customers: Vec<i64>,
    pub sell_date: Option<DateFilter>,
    pub amount: Option<AmountFilter>,
    /// Raw payment-status code.
    pub status: Option<String>,
}

/// Server-side sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Number,
    SellDate,
    InvoiceDate,
    PaymentDate,
    CustomerName,
    Amount,
    PaymentStatus,
}

impl SortField {
    pub fn as_query(&self) -> &'static str {
        match self {
            SortField::Number => "invoiceNumber",
            SortField::SellDate => "sellDate",
            SortField::InvoiceDate => "invoiceDate",
            SortField::PaymentDate => "paymentDate",
            SortField::CustomerName => "customerName",
            SortField::Amount => "amount",
            SortField::PaymentStatus => "paymentStatus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_query(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDescriptor {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortDescriptor {
    fn default() -> Self {
        SortDescriptor {
            field: SortField::Number,
            direction: SortDirection::Descending,
        }
    }
}
