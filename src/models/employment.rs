//! Employment and company settings models.
//!
//! Both own an independent price list of [`RowTypeDefinition`] entries. The
//! employment's list takes priority over the company's list when resolving a
//! price.

use serde::{Deserialize, Serialize};

use super::RowTypeDefinition;

/// Work related settings of an employment relation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentWork {
    /// Employment specific price list.
    #[serde(default)]
    pub salary_defaults: Vec<RowTypeDefinition>,
}

/// An employment relation between the employer and a worker.
///
/// # Example
///
/// ```
/// use payroll_expressions::models::{CalculationRowType, Employment, RowTypeDefinition};
///
/// let employment = Employment::with_price_list(vec![
///     RowTypeDefinition::new(CalculationRowType::HourlySalary).with_price(21.0),
/// ]);
/// assert_eq!(employment.price_list().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employment {
    /// Identifier of the employment in the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Work related settings.
    #[serde(default)]
    pub work: EmploymentWork,
}

impl Employment {
    /// Creates an employment owning the given price list.
    pub fn with_price_list(salary_defaults: Vec<RowTypeDefinition>) -> Self {
        Self {
            id: None,
            work: EmploymentWork { salary_defaults },
        }
    }

    /// The employment's price list, in priority order.
    pub fn price_list(&self) -> &[RowTypeDefinition] {
        &self.work.salary_defaults
    }
}

/// Calculation related company settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCalcSettings {
    /// Company wide price list.
    #[serde(default)]
    pub salary_defaults: Vec<RowTypeDefinition>,
}

/// The settings of the employer's company account.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAccountSettings {
    /// Calculation related settings.
    #[serde(default)]
    pub calc: CompanyCalcSettings,
}

impl CompanyAccountSettings {
    /// Creates settings owning the given price list.
    pub fn with_price_list(salary_defaults: Vec<RowTypeDefinition>) -> Self {
        Self {
            calc: CompanyCalcSettings { salary_defaults },
        }
    }

    /// The company's price list, in priority order.
    pub fn price_list(&self) -> &[RowTypeDefinition] {
        &self.calc.salary_defaults
    }
}
