use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use covstats_rs::{Client, Config, CountryStats, Metric, countries, stats, storage};
use num_format::{Locale, ToFormattedString};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "covstats",
    version,
    about = "Fetch, cache & summarize COVID-19 country statistics"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Latest snapshot for one country.
    Country(CountryArgs),
    /// Global summary and top-N ranking across all countries.
    All(AllArgs),
    /// List the supported country names.
    Countries,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MetricArg {
    Confirmed,
    Deaths,
    Recovered,
    Active,
}

impl From<MetricArg> for Metric {
    fn from(m: MetricArg) -> Self {
        match m {
            MetricArg::Confirmed => Metric::Confirmed,
            MetricArg::Deaths => Metric::Deaths,
            MetricArg::Recovered => Metric::Recovered,
            MetricArg::Active => Metric::Active,
        }
    }
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct CountryArgs {
    /// Country display name (e.g., Ghana). See `covstats countries`.
    name: String,
}

#[derive(Args, Debug)]
struct AllArgs {
    /// Metric to rank countries by.
    #[arg(long, value_enum, default_value = "confirmed")]
    metric: MetricArg,
    /// How many countries to show.
    #[arg(long, default_value_t = 10)]
    top: usize,
    /// Save the full snapshot to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

/// "N/A" for absent fields, thousands separators otherwise.
fn fmt_count(v: Option<u64>) -> String {
    match v {
        Some(n) => n.to_formatted_string(&Locale::en),
        None => CountryStats::display(v),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Country(args) => cmd_country(args),
        Command::All(args) => cmd_all(args),
        Command::Countries => {
            for name in countries::supported_countries() {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

fn cmd_country(args: CountryArgs) -> Result<()> {
    let code = countries::resolve(&args.name)?;
    let client = Client::new(Config::from_env()?);
    let s = client.fetch_country(&code)?;

    println!("Country:   {}", s.country);
    println!("Confirmed: {}", fmt_count(s.confirmed));
    println!("Deaths:    {}", fmt_count(s.deaths));
    println!("Recovered: {}", fmt_count(s.recovered));
    println!("Active:    {}", fmt_count(s.active));
    println!("Critical:  {}", fmt_count(s.critical));
    if let Some(t) = s.last_update {
        println!("Updated:   {}", t.to_rfc3339());
    }
    Ok(())
}

fn cmd_all(args: AllArgs) -> Result<()> {
    let client = Client::new(Config::from_env()?);
    let records = client.fetch_all()?;

    let summary = stats::summarize(&records);
    println!("Global totals across {} countries", records.len());
    println!("  Confirmed: {}", summary.confirmed.to_formatted_string(&Locale::en));
    println!("  Deaths:    {}", summary.deaths.to_formatted_string(&Locale::en));
    println!("  Recovered: {}", summary.recovered.to_formatted_string(&Locale::en));
    println!("  Active:    {}", summary.active.to_formatted_string(&Locale::en));

    let metric: Metric = args.metric.into();
    let top = stats::rank(&records, metric, args.top);
    println!();
    println!("Top {} by {}", top.len(), metric);
    for (i, r) in top.iter().enumerate() {
        println!(
            "{:>3}. {:<24} {}",
            i + 1,
            r.country,
            r.metric(metric).to_formatted_string(&Locale::en)
        );
    }

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "json" => storage::save_json(&records, path)?,
            _ => storage::save_csv(&records, path)?,
        }
        println!();
        println!("Saved snapshot to {}", path.display());
    }

    Ok(())
}
