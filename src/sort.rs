use std::cmp::Ordering;

use crate::models::{Amount, Invoice};

/// Columns the table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Number,
    Status,
    Amount,
    IssueDate,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current table ordering. Selecting the active column flips the
/// direction; selecting a different column resets to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self::new(field)
        }
    }
}

/// Order the current page in place. Stable: rows with equal keys keep
/// their fetched order. This never issues a request and never touches
/// pagination.
pub fn sort_invoices(invoices: &mut [Invoice], field: SortField, direction: SortDirection) {
    invoices.sort_by(|a, b| {
        let ordering = compare_by(a, b, field);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_by(a: &Invoice, b: &Invoice, field: SortField) -> Ordering {
    match field {
        SortField::Number => a.invoice_number.cmp(&b.invoice_number),
        SortField::Status => a.status.cmp(&b.status),
        SortField::Amount => compare_amounts(&a.amount, &b.amount),
        SortField::IssueDate => a.issue_date.cmp(&b.issue_date),
        SortField::Active => a.active.cmp(&b.active),
    }
}

/// Numeric when both sides have a recoverable number; amounts that stay
/// textual sort after numeric ones, among themselves lexicographically.
fn compare_amounts(a: &Amount, b: &Amount) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => amount_text(a).cmp(amount_text(b)),
    }
}

fn amount_text(amount: &Amount) -> &str {
    match amount {
        Amount::Raw(_) => "",
        Amount::Formatted(text) => text,
    }
}
