use anyhow::Result;
use clap::Parser;
use zensus_dashboard::cli::{run, Args};

fn main() -> Result<()> {
    run(Args::parse())
}
