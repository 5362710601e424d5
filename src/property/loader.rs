//! Load a portfolio of properties from a CSV file

use super::{Property, PropertyError};
use csv::Reader;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Failure while loading a portfolio file
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("failed to parse portfolio CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("property {property_id} rejected: {source}")]
    Invalid {
        property_id: u32,
        #[source]
        source: PropertyError,
    },
}

/// Raw CSV row matching the portfolio file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "PropertyID")]
    property_id: u32,
    #[serde(rename = "PropertyName")]
    name: String,
    #[serde(rename = "PropertyValue")]
    property_value: f64,
    #[serde(rename = "DownPayment")]
    down_payment: f64,
    #[serde(rename = "AnnualAppreciation")]
    annual_appreciation: f64,
    #[serde(rename = "PropertyTaxRate")]
    property_tax_rate: f64,
    #[serde(rename = "MonthlyRent")]
    monthly_rent: f64,
    #[serde(rename = "RentalAppreciation")]
    rental_appreciation: f64,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
    #[serde(rename = "LoanTermYears")]
    loan_term_years: u32,
}

impl CsvRow {
    fn into_property(self) -> Property {
        Property {
            property_id: self.property_id,
            name: self.name,
            property_value: self.property_value,
            down_payment: self.down_payment,
            annual_appreciation: self.annual_appreciation,
            property_tax_rate: self.property_tax_rate,
            monthly_rent: self.monthly_rent,
            rental_appreciation: self.rental_appreciation,
            interest_rate: self.interest_rate,
            loan_term_years: self.loan_term_years,
        }
    }
}

/// Load and validate a portfolio from a CSV file
pub fn load_portfolio(path: &Path) -> Result<Vec<Property>, PortfolioError> {
    let reader = Reader::from_path(path)?;
    let portfolio = load_from_reader(reader)?;
    log::info!("loaded {} properties from {}", portfolio.len(), path.display());
    Ok(portfolio)
}

/// Load and validate a portfolio from any CSV reader
pub fn load_from_reader<R: io::Read>(
    mut reader: Reader<R>,
) -> Result<Vec<Property>, PortfolioError> {
    let mut portfolio = Vec::new();

    for row in reader.deserialize() {
        let row: CsvRow = row?;
        let property = row.into_property();
        property
            .validate()
            .map_err(|source| PortfolioError::Invalid {
                property_id: property.property_id,
                source,
            })?;
        portfolio.push(property);
    }

    Ok(portfolio)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "PropertyID,PropertyName,PropertyValue,DownPayment,AnnualAppreciation,PropertyTaxRate,MonthlyRent,RentalAppreciation,InterestRate,LoanTermYears";

    fn read(csv_body: &str) -> Result<Vec<Property>, PortfolioError> {
        let data = format!("{HEADER}\n{csv_body}");
        load_from_reader(Reader::from_reader(data.as_bytes()))
    }

    #[test]
    fn test_load_two_properties() {
        let portfolio = read(
            "1,Maple St Duplex,600000,150000,6,0.51,2500,5,4.5,30\n\
             2,,350000,70000,4,1.1,1800,3,6.25,15",
        )
        .unwrap();

        assert_eq!(portfolio.len(), 2);
        assert_eq!(portfolio[0].name, "Maple St Duplex");
        assert_eq!(portfolio[0].loan_term_years, 30);
        assert!(portfolio[1].name.is_empty());
        assert_eq!(portfolio[1].loan_term_years, 15);
    }

    #[test]
    fn test_load_rejects_invalid_record() {
        // Down payment above property value
        let err = read("7,Bad Deal,200000,250000,6,0.51,2500,5,4.5,30").unwrap_err();

        match err {
            PortfolioError::Invalid {
                property_id,
                source,
            } => {
                assert_eq!(property_id, 7);
                assert!(matches!(
                    source,
                    PropertyError::DownPaymentExceedsValue { .. }
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_rejects_malformed_row() {
        let err = read("1,House,not_a_number,150000,6,0.51,2500,5,4.5,30").unwrap_err();
        assert!(matches!(err, PortfolioError::Csv(_)));
    }
}
