// src/bin/cli.rs
use clap::Parser;
use magang_katalog::{cli, config::AppOptions, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();
    let opts = args.apply_to(AppOptions::from_env());
    let _log = log::init(&opts.log_dir, true);
    opts.log_rejected();

    cli::run(&args, &opts)?;
    Ok(())
}
