//! Row type selectors.
//!
//! A [`RowTypeSelector`] picks rows out of a calculation, or entries out of a
//! price list, by row type, by type path or by an arbitrary predicate.

use std::fmt;

use chrono::NaiveDate;

use crate::models::{CalculationRowType, DateRange, Row, RowData, RowTypeDefinition};

/// A borrowed view of something a selector can match: a calculation row or a
/// price-list entry.
#[derive(Debug, Clone, Copy)]
pub enum RowRef<'a> {
    /// A calculation row.
    Row(&'a Row),
    /// A price-list entry.
    Definition(&'a RowTypeDefinition),
}

impl<'a> RowRef<'a> {
    /// The row type.
    pub fn row_type(&self) -> &'a CalculationRowType {
        match self {
            RowRef::Row(row) => &row.row_type,
            RowRef::Definition(entry) => &entry.row_type,
        }
    }

    /// The type path, if set.
    pub fn type_path(&self) -> Option<&'a str> {
        match self {
            RowRef::Row(row) => row.type_path.as_deref(),
            RowRef::Definition(entry) => entry.type_path.as_deref(),
        }
    }

    /// The raw count, if set.
    pub fn count(&self) -> Option<f64> {
        match self {
            RowRef::Row(row) => row.count,
            RowRef::Definition(entry) => entry.count,
        }
    }

    /// The raw price, if set.
    pub fn price(&self) -> Option<f64> {
        match self {
            RowRef::Row(row) => row.price,
            RowRef::Definition(entry) => entry.price,
        }
    }

    /// The period, if set.
    pub fn period(&self) -> Option<&'a DateRange> {
        match self {
            RowRef::Row(row) => row.period.as_ref(),
            RowRef::Definition(entry) => entry.period.as_ref(),
        }
    }

    /// The period start date, if set.
    pub fn period_start(&self) -> Option<NaiveDate> {
        self.period().and_then(|p| p.start)
    }

    /// The data payload, if set.
    pub fn data(&self) -> Option<&'a RowData> {
        match self {
            RowRef::Row(row) => row.data.as_ref(),
            RowRef::Definition(entry) => entry.data.as_ref(),
        }
    }

    /// The `data.kind`, if set.
    pub fn data_kind(&self) -> Option<&'a str> {
        self.data().and_then(RowData::kind)
    }
}

/// Predicate signature accepted by [`RowTypeSelector::Predicate`].
pub type RowPredicate<'a> = Box<dyn Fn(RowRef<'_>) -> bool + 'a>;

/// Selects rows or price-list entries.
///
/// Strings convert into selectors: a string with a `/` after its first
/// character is a [`TypePath`](RowTypeSelector::TypePath), anything else is
/// a [`RowType`](RowTypeSelector::RowType). An empty value matches nothing.
///
/// Predicates run caller code. A panicking predicate is not caught: the
/// panic reaches whoever invoked the script.
///
/// # Example
///
/// ```
/// use payroll_expressions::expressions::RowTypeSelector;
/// use payroll_expressions::models::{CalculationRowType, Row};
///
/// let row = Row::new(CalculationRowType::HourlySalary)
///     .with_type_path("builtIn/hourlySalary")
///     .with_count(40.0);
///
/// assert!(RowTypeSelector::from("hourlySalary").matches_row(&row));
/// assert!(RowTypeSelector::from("builtIn/hourlySalary").matches_row(&row));
/// assert!(RowTypeSelector::predicate(|r| r.count() == Some(40.0)).matches_row(&row));
/// assert!(!RowTypeSelector::from("").matches_row(&row));
/// ```
pub enum RowTypeSelector<'a> {
    /// Matches the row type.
    RowType(CalculationRowType),
    /// Matches the hierarchical type path.
    TypePath(String),
    /// Matches whatever the predicate accepts.
    Predicate(RowPredicate<'a>),
}

impl<'a> RowTypeSelector<'a> {
    /// Creates a predicate selector.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(RowRef<'_>) -> bool + 'a,
    {
        RowTypeSelector::Predicate(Box::new(predicate))
    }

    /// Returns true for a flat selector with an empty value.
    pub fn is_empty(&self) -> bool {
        match self {
            RowTypeSelector::RowType(row_type) => row_type.is_empty(),
            RowTypeSelector::TypePath(path) => path.is_empty(),
            RowTypeSelector::Predicate(_) => false,
        }
    }

    /// Checks a calculation row.
    ///
    /// Flat values match the row type **or** the type path, so
    /// `"hourlySalary"` also finds a custom row whose path happens to be
    /// `"hourlySalary"`.
    pub fn matches_row(&self, row: &Row) -> bool {
        match self {
            RowTypeSelector::RowType(row_type) => {
                !row_type.is_empty()
                    && (&row.row_type == row_type
                        || row.type_path.as_deref() == Some(row_type.as_str()))
            }
            RowTypeSelector::TypePath(path) => {
                !path.is_empty()
                    && (row.type_path.as_deref() == Some(path.as_str())
                        || row.row_type == path.as_str())
            }
            RowTypeSelector::Predicate(predicate) => predicate(RowRef::Row(row)),
        }
    }

    /// Checks a price-list entry.
    ///
    /// Stricter than [`matches_row`](Self::matches_row): a row type only
    /// compares against `rowType` and a type path only against `type`.
    pub fn matches_definition(&self, entry: &RowTypeDefinition) -> bool {
        match self {
            RowTypeSelector::RowType(row_type) => {
                !row_type.is_empty() && &entry.row_type == row_type
            }
            RowTypeSelector::TypePath(path) => {
                !path.is_empty() && entry.type_path.as_deref() == Some(path.as_str())
            }
            RowTypeSelector::Predicate(predicate) => predicate(RowRef::Definition(entry)),
        }
    }
}

impl From<&str> for RowTypeSelector<'_> {
    fn from(value: &str) -> Self {
        if value.find('/').is_some_and(|index| index > 0) {
            RowTypeSelector::TypePath(value.to_string())
        } else {
            RowTypeSelector::RowType(CalculationRowType::from(value))
        }
    }
}

impl From<String> for RowTypeSelector<'_> {
    fn from(value: String) -> Self {
        RowTypeSelector::from(value.as_str())
    }
}

impl From<CalculationRowType> for RowTypeSelector<'_> {
    fn from(value: CalculationRowType) -> Self {
        RowTypeSelector::RowType(value)
    }
}

impl fmt::Debug for RowTypeSelector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowTypeSelector::RowType(row_type) => {
                f.debug_tuple("RowType").field(row_type).finish()
            }
            RowTypeSelector::TypePath(path) => f.debug_tuple("TypePath").field(path).finish(),
            RowTypeSelector::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl fmt::Display for RowTypeSelector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowTypeSelector::RowType(row_type) => write!(f, "{}", row_type),
            RowTypeSelector::TypePath(path) => f.write_str(path),
            RowTypeSelector::Predicate(_) => f.write_str("<predicate>"),
        }
    }
}
