use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use csv::Writer;

use nbrb_rates::{config, Currency, NbrbClient};

/// Print NBRB daily currency exchange rates.
#[derive(Parser)]
#[command(name = "nbrb-rates", version, about)]
struct Cli {
    /// Date to fetch rates for, MM/dd/yyyy (defaults to the most recent).
    #[arg(short, long)]
    date: Option<String>,

    /// Comma-separated short codes to keep, e.g. USD,EUR. Overrides the
    /// config file; omit both for all currencies.
    #[arg(short, long, value_delimiter = ',')]
    currencies: Vec<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Copy, Clone, ValueEnum)]
enum Format {
    Table,
    Csv,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config().unwrap_or_default();

    let filter = if !cli.currencies.is_empty() {
        Some(cli.currencies)
    } else if !config.currencies.is_empty() {
        Some(config.currencies)
    } else {
        None
    };

    let client = NbrbClient::with_base_url(&config.base_url);
    let currencies = client
        .daily_rates(filter.as_deref(), cli.date.as_deref())
        .await
        .context("failed to get daily rates")?;

    if currencies.is_empty() {
        eprintln!("No rates returned for the requested date/currencies");
        return Ok(());
    }

    match cli.format {
        Format::Table => print_table(&currencies),
        Format::Csv => write_csv(&currencies)?,
    }

    Ok(())
}

fn print_table(currencies: &[Currency]) {
    println!(
        "{:<6} {:<6} {:>6} {:>12}  {}",
        "Code", "Char", "Scale", "Rate", "Name"
    );
    for currency in currencies {
        println!(
            "{:<6} {:<6} {:>6} {:>12.4}  {}",
            currency.code, currency.short_name, currency.amount, currency.rate, currency.name
        );
    }
}

fn write_csv(currencies: &[Currency]) -> Result<()> {
    let mut writer = Writer::from_writer(std::io::stdout());
    writer.write_record(["NumCode", "CharCode", "Scale", "Rate", "Name"])?;
    for currency in currencies {
        writer.write_record(&[
            currency.code.clone(),
            currency.short_name.clone(),
            currency.amount.to_string(),
            currency.rate.to_string(),
            currency.name.clone(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
