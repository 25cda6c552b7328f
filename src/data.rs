// src/data.rs
//
// Light wrappers around the canonical dataset and the view derived from it.
//
// - Catalog:     read-only holder for the fetched vacancies. Built once per
//                session; nothing mutates it afterwards.
// - CatalogView: derived (view) data produced from a Catalog by running the
//                filter/sort/paginate pipeline against committed criteria.
// - FilterOptions: select-control choices, always from the full dataset.

use std::collections::BTreeSet;

use crate::model::{Filters, Vacancy};
use crate::pipeline::{self, PageWindow};

/// Authoritative, canonical dataset for the session.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    vacancies: Vec<Vacancy>,
    options: FilterOptions,
}

impl Catalog {
    pub fn new(vacancies: Vec<Vacancy>) -> Self {
        let options = FilterOptions::from_vacancies(&vacancies);
        Self { vacancies, options }
    }

    pub fn vacancies(&self) -> &[Vacancy] { &self.vacancies }
    pub fn options(&self) -> &FilterOptions { &self.options }
    pub fn len(&self) -> usize { self.vacancies.len() }
    pub fn is_empty(&self) -> bool { self.vacancies.is_empty() }

    /// Run the pipeline for `filters` and `page` (1-based).
    pub fn view(&self, filters: &Filters, page: usize, page_size: usize) -> CatalogView<'_> {
        CatalogView::build(&self.vacancies, filters, page, page_size)
    }
}

/// Zero-copy filtered, sorted and paged view.
/// Holds positions into the catalog, not vacancies.
#[derive(Clone, Debug)]
pub struct CatalogView<'a> {
    /// Positions of every matching vacancy, in display order
    pub row_ix: Vec<usize>,
    pub window: PageWindow,
    raw: &'a [Vacancy],
}

impl<'a> CatalogView<'a> {
    pub fn build(raw: &'a [Vacancy], filters: &Filters, page: usize, page_size: usize) -> Self {
        let mut row_ix = pipeline::filter_indices(raw, filters);
        pipeline::sort_indices(raw, &mut row_ix, filters.sort);
        let window = pipeline::paginate(row_ix.len(), page, page_size);
        Self { row_ix, window, raw }
    }

    /// Page over already filtered and sorted positions (cache hit path).
    pub fn from_indices(raw: &'a [Vacancy], row_ix: Vec<usize>, page: usize, page_size: usize) -> Self {
        let window = pipeline::paginate(row_ix.len(), page, page_size);
        Self { row_ix, window, raw }
    }

    /// Number of matching vacancies across all pages.
    pub fn total(&self) -> usize { self.row_ix.len() }
    pub fn page(&self) -> usize { self.window.page }
    pub fn total_pages(&self) -> usize { self.window.total_pages }
    pub fn is_first_page(&self) -> bool { self.window.page <= 1 }
    pub fn is_last_page(&self) -> bool { self.window.page >= self.window.total_pages }

    /// Vacancies on the current page, borrowed from the catalog.
    pub fn visible(&self) -> impl Iterator<Item = &'a Vacancy> + '_ {
        self.row_ix[self.window.range.clone()].iter().map(|&i| &self.raw[i])
    }

    pub fn visible_len(&self) -> usize { self.window.range.len() }
}

/// Sorted, de-duplicated choices for the select controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub provinces: Vec<String>,
    pub cities: Vec<String>,
    pub companies: Vec<String>,
    pub programs: Vec<String>,
}

impl FilterOptions {
    pub fn from_vacancies(vacancies: &[Vacancy]) -> Self {
        let mut provinces = BTreeSet::new();
        let mut cities = BTreeSet::new();
        let mut companies = BTreeSet::new();
        let mut programs = BTreeSet::new();

        fn keep(set: &mut BTreeSet<String>, v: Option<&str>) {
            if let Some(s) = v.filter(|s| !s.is_empty()) {
                set.insert(s.to_string());
            }
        }

        for v in vacancies {
            keep(&mut provinces, v.province());
            keep(&mut cities, v.city());
            keep(&mut companies, v.company_name());
            for p in v.programs() {
                keep(&mut programs, Some(p.title.as_str()));
            }
        }

        Self {
            provinces: provinces.into_iter().collect(),
            cities: cities.into_iter().collect(),
            companies: companies.into_iter().collect(),
            programs: programs.into_iter().collect(),
        }
    }
}
