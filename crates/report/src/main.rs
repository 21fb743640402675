// File: crates/report/src/main.rs
// Summary: Synthesizes the employee/sales tables, prints them and renders the analysis dashboard to PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use staff_data::{generate_roster, summarize, synthesize_sales, SalesConfig, SALES_SEED};
use staff_report::{charts, export, standard_bonuses, tables};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Employee and sales analysis report
#[derive(Parser)]
#[command(name = "staff-report", version, about, long_about = None)]
struct Cli {
    /// Directory for the dashboard PNG and CSV tables
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Chart theme (light, dark, solarized-light, high-contrast-dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let today = chrono::Local::now().date_naive();
    let employees = generate_roster(&mut StdRng::from_entropy(), today).context("generating roster")?;

    let config = SalesConfig::default().with_bonuses(standard_bonuses());
    let mut rng = StdRng::seed_from_u64(SALES_SEED);
    let sales = synthesize_sales(&employees, &config, &mut rng).context("synthesizing sales")?;
    debug!(employees = employees.len(), sales = sales.len(), seed = SALES_SEED, "tables ready");

    println!("Employees:");
    print!("{}", tables::employee_table(&employees));
    println!("\nSales (first 10 rows):");
    print!("{}", tables::sales_table(&sales, 10));

    let mut opts = chart_core::RenderOptions::default();
    opts.width = 1600;
    opts.height = 1200;
    opts.theme = chart_core::theme::find(&cli.theme);
    if !opts.theme.name.eq_ignore_ascii_case(&cli.theme) {
        warn!(requested = %cli.theme, using = opts.theme.name, "unknown theme");
    }

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating output directory {}", cli.out_dir.display()))?;

    let out_png = cli.out_dir.join("staff_dashboard.png");
    charts::dashboard(&employees, &sales)
        .render_to_png(&opts, &out_png)
        .with_context(|| format!("rendering {}", out_png.display()))?;
    info!(path = %out_png.display(), "wrote dashboard");

    let out_employees = cli.out_dir.join("employees.csv");
    export::write_employees_csv(&out_employees, &employees)?;
    let out_sales = cli.out_dir.join("sales.csv");
    export::write_sales_csv(&out_sales, &sales)?;
    info!(employees = %out_employees.display(), sales = %out_sales.display(), "wrote tables");

    println!();
    print!("{}", tables::summary_lines(&summarize(&employees, &sales)));
    Ok(())
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
