//! Rental Projection CLI
//!
//! Runs the 30-year portfolio projection and prints it as a yearly table,
//! with optional CSV/JSON export and a combined income report.

use anyhow::Context;
use clap::Parser;
use rental_projection::{aggregate, report, Assumptions, PortfolioSnapshot, ProjectionEngine, Property};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rental_projection", version, about = "30-year rental portfolio projections")]
struct Args {
    /// Portfolio CSV file; runs a built-in sample property when omitted
    #[arg(long)]
    portfolio: Option<PathBuf>,

    /// Write the aggregated projection to a CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the aggregated projection to a JSON file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print the combined income report after the projection table
    #[arg(long)]
    combined: bool,
}

/// Sample property used when no portfolio file is given
fn sample_portfolio() -> Vec<Property> {
    vec![Property::new(
        1,
        "Sample Property",
        600_000.0,  // property value
        150_000.0,  // down payment
        6.0,        // annual appreciation %
        0.51,       // property tax rate %
        2_500.0,    // monthly rent
        5.0,        // rental appreciation %
        4.5,        // interest rate %
        30,         // loan term years
    )]
}

fn write_csv(path: &PathBuf, rows: &[PortfolioSnapshot]) -> anyhow::Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writeln!(file, "Year,PropertyValue,Equity,RentalIncome,PropertyTax,CashFlow,MortgagePayment,LoanBalance,PrincipalPaid,InterestPaid,RecaptureEstimate,TotalReturn,ROI")?;
    for row in rows {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.4}",
            row.year,
            row.property_value,
            row.equity,
            row.annual_rental_income,
            row.property_tax,
            row.cash_flow,
            row.mortgage_payment,
            row.remaining_loan_balance,
            row.principal_paid,
            row.interest_paid,
            row.recapture_estimate,
            row.total_return,
            row.roi,
        )?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let portfolio = match &args.portfolio {
        Some(path) => rental_projection::property::load_portfolio(path)
            .with_context(|| format!("failed to load portfolio from {}", path.display()))?,
        None => {
            log::info!("no portfolio file given, using built-in sample property");
            sample_portfolio()
        }
    };

    println!("Rental Portfolio Projection ({} properties)", portfolio.len());
    for property in &portfolio {
        let name = if property.name.is_empty() {
            "Unnamed Property"
        } else {
            property.name.as_str()
        };
        println!(
            "  [{}] {}: ${:.0} value, ${:.0} down, {:.2}% @ {}yr, ${:.0}/mo rent",
            property.property_id,
            name,
            property.property_value,
            property.down_payment,
            property.interest_rate,
            property.loan_term_years,
            property.monthly_rent,
        );
    }
    println!();

    let engine = ProjectionEngine::new(Assumptions::default());
    let rows = aggregate(&engine, &portfolio);

    println!(
        "{:>4} {:>14} {:>14} {:>12} {:>12} {:>12} {:>14} {:>14} {:>9}",
        "Year", "Value", "Equity", "Rent", "Tax", "CashFlow", "LoanBalance", "TotalReturn", "ROI%"
    );
    println!("{}", "-".repeat(112));
    for row in &rows {
        println!(
            "{:>4} {:>14.0} {:>14.0} {:>12.0} {:>12.0} {:>12.0} {:>14.0} {:>14.0} {:>9.2}",
            row.year,
            row.property_value,
            row.equity,
            row.annual_rental_income,
            row.property_tax,
            row.cash_flow,
            row.remaining_loan_balance,
            row.total_return,
            row.roi,
        );
    }

    if args.combined {
        println!("\nCombined Income Report");
        println!(
            "{:>4} {:>14} {:>14} {:>14} {:>16}",
            "Year", "RentalIncome", "CashFlow", "Recapture", "NetCombined"
        );
        println!("{}", "-".repeat(66));
        for row in report::combined_income(&rows) {
            println!(
                "{:>4} {:>14.0} {:>14.0} {:>14.0} {:>16.0}",
                row.year,
                row.annual_rental_income,
                row.cash_flow,
                row.recapture_estimate,
                row.net_combined_income,
            );
        }
    }

    if let Some(path) = &args.output {
        write_csv(path, &rows)?;
        println!("\nProjection written to {}", path.display());
    }

    if let Some(path) = &args.json {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &rows)?;
        println!("Projection written to {}", path.display());
    }

    Ok(())
}
