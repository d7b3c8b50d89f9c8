//! Price resolution from the employment and company price lists.
//!
//! A price is looked up from the employment's list first. When that yields
//! no usable price (nothing matched, or the matched price is zero or
//! missing) the company's list is consulted. The first matching entry of a
//! list wins.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::selector::RowTypeSelector;
use crate::models::{AuditStep, CompanyAccountSettings, Employment, RowTypeDefinition};

/// Which price list a resolved price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    /// The employment's own price list.
    Employment,
    /// The company-wide price list.
    Company,
    /// Neither list had a matching entry.
    NotFound,
}

/// A resolved price together with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResolution {
    /// The resolved price, identical to [`PricesHelper::get`].
    pub price: f64,
    /// The list the price came from.
    pub source: PriceSource,
    /// Audit record of the decision.
    pub audit_step: AuditStep,
}

/// Price lookups over an employment and the company settings.
///
/// # Example
///
/// ```
/// use payroll_expressions::expressions::PricesHelper;
/// use payroll_expressions::models::{
///     CalculationRowType, CompanyAccountSettings, Employment, RowTypeDefinition,
/// };
///
/// let employment = Employment::default();
/// let settings = CompanyAccountSettings::with_price_list(vec![
///     RowTypeDefinition::new(CalculationRowType::HourlySalary).with_price(21.0),
/// ]);
/// let prices = PricesHelper::new(&employment, &settings);
///
/// assert_eq!(prices.get(&"hourlySalary".into()), 21.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PricesHelper<'a> {
    employment: &'a [RowTypeDefinition],
    company: &'a [RowTypeDefinition],
}

impl<'a> PricesHelper<'a> {
    /// Creates a helper over the price lists of an employment and a company.
    pub fn new(employment: &'a Employment, settings: &'a CompanyAccountSettings) -> Self {
        Self::from_lists(employment.price_list(), settings.price_list())
    }

    /// Creates a helper over two raw price lists.
    pub fn from_lists(employment: &'a [RowTypeDefinition], company: &'a [RowTypeDefinition]) -> Self {
        Self {
            employment,
            company,
        }
    }

    /// The employment price, falling back to the company price when the
    /// employment price is zero, NaN or missing. 0 when neither list matches.
    pub fn get(&self, selector: &RowTypeSelector<'_>) -> f64 {
        let employment_price = self.get_employment(selector);
        if overrides_company(employment_price) {
            return employment_price;
        }
        self.get_company(selector)
    }

    /// Price of the first matching employment entry, or 0.
    pub fn get_employment(&self, selector: &RowTypeSelector<'_>) -> f64 {
        first_price(self.employment, selector)
    }

    /// Price of the first matching company entry, or 0.
    pub fn get_company(&self, selector: &RowTypeSelector<'_>) -> f64 {
        first_price(self.company, selector)
    }

    /// All matching employment entries, in list order.
    pub fn employment_price_rows(&self, selector: &RowTypeSelector<'_>) -> Vec<&'a RowTypeDefinition> {
        matching(self.employment, selector)
    }

    /// All matching company entries, in list order.
    pub fn company_price_rows(&self, selector: &RowTypeSelector<'_>) -> Vec<&'a RowTypeDefinition> {
        matching(self.company, selector)
    }

    /// Resolves a price like [`get`](Self::get) and records where it came from.
    pub fn resolve(&self, selector: &RowTypeSelector<'_>, step_number: u32) -> PriceResolution {
        let employment_match = self.employment.iter().find(|e| selector.matches_definition(e));
        let company_match = self.company.iter().find(|e| selector.matches_definition(e));

        let employment_price = employment_match.map_or(0.0, |e| e.price_or_default());
        let company_price = company_match.map_or(0.0, |e| e.price_or_default());

        let (price, source, reasoning) = if overrides_company(employment_price) {
            (
                employment_price,
                PriceSource::Employment,
                format!("Employment price {} used", employment_price),
            )
        } else if company_match.is_some() {
            let reasoning = if employment_match.is_some() {
                format!("Employment price is zero or NaN, company price {} used", company_price)
            } else {
                format!("No employment price, company price {} used", company_price)
            };
            (company_price, PriceSource::Company, reasoning)
        } else {
            (
                0.0,
                PriceSource::NotFound,
                "No matching price in employment or company price list".to_string(),
            )
        };

        debug!(selector = %selector, price, source = ?source, "Price resolved");

        let audit_step = AuditStep {
            step_number,
            rule_id: "price_resolution".to_string(),
            rule_name: "Price Resolution".to_string(),
            input: json!({
                "selector": selector.to_string(),
                "employment_match": employment_match.is_some(),
                "employment_price": employment_price,
                "company_match": company_match.is_some(),
                "company_price": company_price,
            }),
            output: json!({
                "price": price,
                "source": source,
            }),
            reasoning,
        };

        PriceResolution {
            price,
            source,
            audit_step,
        }
    }
}

fn matching<'a>(list: &'a [RowTypeDefinition], selector: &RowTypeSelector<'_>) -> Vec<&'a RowTypeDefinition> {
    list.iter().filter(|e| selector.matches_definition(e)).collect()
}

fn first_price(list: &[RowTypeDefinition], selector: &RowTypeSelector<'_>) -> f64 {
    list.iter()
        .find(|e| selector.matches_definition(e))
        .map_or(0.0, RowTypeDefinition::price_or_default)
}

fn overrides_company(employment_price: f64) -> bool {
    employment_price != 0.0 && !employment_price.is_nan()
}
