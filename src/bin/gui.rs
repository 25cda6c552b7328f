// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use magang_katalog::{config::AppOptions, gui, log};

fn main() {
    let opts = AppOptions::from_env();
    let _log = log::init(&opts.log_dir, false);
    opts.log_rejected();

    if let Err(e) = gui::run(opts) {
        tracing::error!("GUI failed: {e}");
        eprintln!("GUI failed: {e}");
        std::process::exit(1);
    }
}
