// src/gui/app.rs
use std::time::Duration;

use eframe::egui;
use tracing::info;

use crate::{
    config::{AppOptions, ViewState, consts::CLOCK_TICK_MS},
    data::{Catalog, CatalogView},
    error::{Error, Result},
    model::Filters,
    source::{self, Loader},
    stats::{self, StatsPoller},
};

use super::components;

pub fn run(options: AppOptions) -> Result<()> {
    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Katalog Lowongan")
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Katalog Lowongan",
        native,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(&cc.egui_ctx, options)))
        }),
    )
    .map_err(|e| Error::Gui(e.to_string()))
}

/// Search text typed into each select's popup.
#[derive(Default)]
pub struct SelectSearch {
    pub province: String,
    pub city: String,
    pub company: String,
    pub program: String,
}

/// Matching rows for one set of committed criteria.
struct MatchCache {
    filters: Filters,
    row_ix: Vec<usize>,
}

pub struct App {
    pub options: AppOptions,

    // single writer for criteria + page (UI thread only)
    pub view: ViewState,

    // canonical dataset; empty until the loader settles
    pub catalog: Catalog,
    loader: Option<Loader>,

    // dropped with the app, which stops the poller thread
    pub stats: StatsPoller,

    pub search: SelectSearch,
    cache: Option<MatchCache>,
}

impl App {
    pub fn new(ctx: &egui::Context, options: AppOptions) -> Self {
        info!("Init: dataset={} page_size={}", options.dataset, options.page_size);

        let src = options.dataset.clone();
        let repaint = ctx.clone();
        let loader = Loader::spawn_with(move || source::load(&src), move || repaint.request_repaint());

        let url = options.stats_url.clone();
        let repaint = ctx.clone();
        let stats = StatsPoller::start_with(
            move || stats::fetch(&url),
            options.stats_interval,
            move || repaint.request_repaint(),
        );

        Self {
            options,
            view: ViewState::default(),
            catalog: Catalog::default(),
            loader: Some(loader),
            stats,
            search: SelectSearch::default(),
            cache: None,
        }
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loader.as_ref().is_some_and(Loader::is_loading)
    }

    /// Move the dataset in from the loader once it has settled.
    fn poll_loader(&mut self) {
        let Some(loader) = self.loader.as_mut() else { return };
        if let Some(vacancies) = loader.take() {
            info!("Init: catalog ready ({} vacancies)", vacancies.len());
            self.catalog = Catalog::new(vacancies);
            self.loader = None;
            self.cache = None;
        }
    }

    /// Pipeline output for the committed criteria and current page.
    /// Filtering and sorting rerun only when the committed criteria change.
    pub fn current_view(&mut self) -> CatalogView<'_> {
        let committed = self.view.committed();
        let stale = self.cache.as_ref().is_none_or(|c| c.filters != *committed);
        if stale {
            let full = CatalogView::build(self.catalog.vacancies(), committed, 1, self.options.page_size);
            self.cache = Some(MatchCache { filters: committed.clone(), row_ix: full.row_ix });
        }

        let row_ix = self.cache.as_ref().map(|c| c.row_ix.clone()).unwrap_or_default();
        CatalogView::from_indices(self.catalog.vacancies(), row_ix, self.view.page(), self.options.page_size)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui, self);
        });

        egui::SidePanel::left("filters")
            .resizable(false)
            .exact_width(280.0)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    components::stats_banner::draw(ui, self);
                    ui.add_space(12.0);
                    components::results::draw(ui, self);
                });
        });

        // clock in the stats banner
        ctx.request_repaint_after(Duration::from_millis(CLOCK_TICK_MS));
    }
}
