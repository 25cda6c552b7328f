// src/cli.rs
//
// One-shot front end: same pipeline as the window, criteria from flags,
// cards printed as text or JSON.

use std::fmt::Write as _;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;

use crate::{
    card::CardView,
    config::AppOptions,
    core::format::format_count,
    data::{Catalog, CatalogView},
    error::Result,
    model::{Filters, SortMode},
    source::{self, DataSource},
    stats,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Provinces,
    Cities,
    Companies,
    Programs,
}

#[derive(Parser, Debug)]
#[command(name = "katalog-cli", version, about = "Search the internship vacancy catalog")]
pub struct Args {
    /// Dataset file path or http(s) URL
    #[arg(long)]
    pub source: Option<String>,

    /// Keyword matched against the position title or company name
    #[arg(long, default_value = "")]
    pub q: String,
    #[arg(long, default_value = "")]
    pub province: String,
    #[arg(long, default_value = "")]
    pub city: String,
    #[arg(long, default_value = "")]
    pub company: String,
    /// Study program title (exact, case-insensitive)
    #[arg(long, default_value = "")]
    pub program: String,

    /// jumlah_terdaftar_asc | jumlah_terdaftar_desc | chance_asc | chance_desc
    #[arg(long)]
    pub sort: Option<SortMode>,

    /// 1-based; out-of-range pages are clamped
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    #[arg(long)]
    pub page_size: Option<usize>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Print the choices of one select control instead of results
    #[arg(long, value_enum)]
    pub list: Option<ListKind>,

    /// Fetch the statistics endpoint once and print it
    #[arg(long)]
    pub stats: bool,
}

impl Args {
    pub fn filters(&self) -> Filters {
        Filters {
            q: self.q.clone(),
            province: self.province.clone(),
            city: self.city.clone(),
            company: self.company.clone(),
            program: self.program.clone(),
            sort: self.sort.unwrap_or_default(),
        }
    }

    /// Flag overrides on top of `base`.
    pub fn apply_to(&self, mut base: AppOptions) -> AppOptions {
        if let Some(src) = self.source.as_deref().filter(|s| !s.trim().is_empty()) {
            base.dataset = DataSource::parse(src);
        }
        if let Some(n) = self.page_size {
            base.set_page_size_text(&n.to_string());
        }
        base
    }
}

#[derive(Serialize)]
struct JsonPage<'a> {
    total: usize,
    page: usize,
    total_pages: usize,
    items: &'a [CardView],
}

/// Run one command and print its output.
pub fn run(args: &Args, opts: &AppOptions) -> Result<()> {
    print!("{}", execute(args, opts)?);
    Ok(())
}

/// Run one command and return what `run` would print.
pub fn execute(args: &Args, opts: &AppOptions) -> Result<String> {
    if args.stats {
        let data = stats::fetch(&opts.stats_url)?;
        let mut out = String::new();
        for (label, value) in data.entries() {
            let _ = writeln!(out, "{label}: {}", format_count(value));
        }
        return Ok(out);
    }

    let catalog = Catalog::new(source::fetch(&opts.dataset)?);
    info!("CLI: {} vacancies from {}", catalog.len(), opts.dataset);

    if let Some(kind) = args.list {
        return Ok(render_list(&catalog, kind));
    }

    let view = catalog.view(&args.filters(), args.page, opts.page_size);
    match args.format {
        Format::Text => Ok(render_text(&view, &opts.detail_base_url)),
        Format::Json => render_json(&view, &opts.detail_base_url),
    }
}

pub fn render_list(catalog: &Catalog, kind: ListKind) -> String {
    let opts = catalog.options();
    let items = match kind {
        ListKind::Provinces => &opts.provinces,
        ListKind::Cities => &opts.cities,
        ListKind::Companies => &opts.companies,
        ListKind::Programs => &opts.programs,
    };
    items.iter().map(|s| format!("{s}\n")).collect()
}

pub fn render_text(view: &CatalogView<'_>, detail_base_url: &str) -> String {
    let mut out = format!("{} hasil · halaman {}/{}\n", view.total(), view.page(), view.total_pages());
    for v in view.visible() {
        out.push('\n');
        out.push_str(&CardView::from_vacancy(v, detail_base_url).to_text());
    }
    out
}

pub fn render_json(view: &CatalogView<'_>, detail_base_url: &str) -> Result<String> {
    let items: Vec<CardView> = view.visible().map(|v| CardView::from_vacancy(v, detail_base_url)).collect();
    let page = JsonPage {
        total: view.total(),
        page: view.page(),
        total_pages: view.total_pages(),
        items: &items,
    };
    let mut out = serde_json::to_string_pretty(&page)?;
    out.push('\n');
    Ok(out)
}
