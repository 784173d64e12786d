//! Monitor binary entry point

use clap::Parser;

use monitor::{HttpOrderProvider, MonitorResult, OrderMonitor};
use shared::{logging, ApiEndpoints};

/// One-shot monitor for medical equipment orders
#[derive(Parser)]
#[command(name = "monitor")]
#[command(about = "Polls the orders API and alerts on delivered items")]
struct Args {
    /// Orders endpoint URL (falls back to ORDERS_API_URL)
    #[arg(long)]
    orders_url: Option<String>,

    /// Alert endpoint URL (falls back to ALERT_API_URL)
    #[arg(long)]
    alert_url: Option<String>,

    /// Update endpoint URL (falls back to UPDATE_API_URL)
    #[arg(long)]
    update_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> MonitorResult<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    logging::init_tracing(Some(&args.log_level));

    let endpoints = ApiEndpoints::resolve(args.orders_url, args.alert_url, args.update_url)?;
    let provider = HttpOrderProvider::new(endpoints)?;
    let monitor = OrderMonitor::new(provider);

    // Single processing pass, then exit.
    monitor.monitor_orders().await;
    Ok(())
}
