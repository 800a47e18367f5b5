//! One-shot table snapshot from the command line.
//!
//! Fetches the current subnet batch through the gateway and prints the
//! sorted projection. Useful for checking the pipeline without a browser.

use anyhow::Result;
use clap::Parser;
use taowatch_core::SortKey;
use taowatch_view::{HttpSubnetSource, ViewModel};

/// Print one snapshot of the subnet table
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Gateway base URL
    #[arg(long, default_value = "http://localhost:5000")]
    gateway_url: String,

    /// Column to sort by (upstream field name, e.g. market_cap)
    #[arg(long, default_value = "netuid")]
    sort: String,

    /// Sort descending instead of ascending
    #[arg(long)]
    desc: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    taowatch_app::logging::init_logging()?;

    let sort: SortKey = args.sort.parse()?;

    let source = HttpSubnetSource::new(args.gateway_url.as_str())?;
    let mut view = ViewModel::new(source);

    // The view starts on netuid ascending; a repeated set_sort flips to
    // descending.
    if sort != view.sort_key() {
        view.set_sort(sort);
    }
    if args.desc {
        view.set_sort(sort);
    }

    view.refresh().await;

    let rows = view.projection();
    println!(
        "{:<8} {:<24} {:<8} {:>16} {:>16} {:>12} {:>16} {:>10}",
        "NetUID", "Name", "Symbol", "Market Cap", "Liquidity", "Price", "24h Volume", "Change"
    );
    for row in &rows {
        println!(
            "{:<8} {:<24} {:<8} {:>16} {:>16} {:>12} {:>16} {:>10}",
            row.netuid,
            row.name,
            row.symbol,
            row.market_cap,
            row.liquidity,
            row.price,
            row.tao_volume_24_hr,
            row.price_change_1_day
        );
    }
    println!("{} subnets", rows.len());

    Ok(())
}
