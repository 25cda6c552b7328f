// src/pipeline.rs
//! Filter → sort → paginate.
//!
//! Everything here is a pure function of its inputs. Results are index lists
//! into the caller's vacancy slice, so nothing is cloned until display.

use std::cmp::Ordering;
use std::ops::Range;

use crate::model::{Filters, SortMode, Vacancy};

/// Pre-lowered criteria, built once per pass.
pub struct Matcher<'f> {
    q: String,
    program: String,
    filters: &'f Filters,
}

impl<'f> Matcher<'f> {
    pub fn new(filters: &'f Filters) -> Self {
        Self {
            q: filters.q.to_lowercase(),
            program: filters.program.to_lowercase(),
            filters,
        }
    }

    /// True when `v` passes every non-empty criterion.
    pub fn matches(&self, v: &Vacancy) -> bool {
        let f = self.filters;

        if !self.q.is_empty() {
            let in_title = v.posisi.to_lowercase().contains(&self.q);
            let in_company = v
                .company_name()
                .map(|c| c.to_lowercase().contains(&self.q))
                .unwrap_or(false);
            if !in_title && !in_company {
                return false;
            }
        }
        if !f.province.is_empty() && v.province() != Some(f.province.as_str()) {
            return false;
        }
        if !f.city.is_empty() && v.city() != Some(f.city.as_str()) {
            return false;
        }
        if !f.company.is_empty() && v.company_name() != Some(f.company.as_str()) {
            return false;
        }
        if !self.program.is_empty()
            && !v.programs().iter().any(|p| p.title.to_lowercase() == self.program)
        {
            return false;
        }
        true
    }
}

/// Positions of the vacancies that pass `filters`, in dataset order.
pub fn filter_indices(vacancies: &[Vacancy], filters: &Filters) -> Vec<usize> {
    let m = Matcher::new(filters);
    vacancies
        .iter()
        .enumerate()
        .filter(|(_, v)| m.matches(v))
        .map(|(i, _)| i)
        .collect()
}

/// Stable sort of `ix` by `mode`. `SortMode::None` leaves it untouched.
///
/// Chance sorts put vacancies without a known ratio after all known ones,
/// in both directions.
pub fn sort_indices(vacancies: &[Vacancy], ix: &mut [usize], mode: SortMode) {
    match mode {
        SortMode::None => {}
        SortMode::RegisteredAsc => {
            ix.sort_by_key(|&i| vacancies[i].registered_or_zero());
        }
        SortMode::RegisteredDesc => {
            ix.sort_by(|&a, &b| {
                vacancies[b].registered_or_zero().cmp(&vacancies[a].registered_or_zero())
            });
        }
        SortMode::ChanceAsc => {
            ix.sort_by(|&a, &b| cmp_chance(vacancies[a].chance(), vacancies[b].chance(), false));
        }
        SortMode::ChanceDesc => {
            ix.sort_by(|&a, &b| cmp_chance(vacancies[a].chance(), vacancies[b].chance(), true));
        }
    }
}

fn cmp_chance(a: Option<f64>, b: Option<f64>, desc: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            let ord = x.total_cmp(&y);
            if desc { ord.reverse() } else { ord }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Where one page sits inside a result list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based, already clamped.
    pub page: usize,
    pub total_pages: usize,
    pub range: Range<usize>,
}

/// Total pages for `len` results; at least 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    len.div_ceil(size).max(1)
}

/// Window for `page` (1-based) over `len` results. Out-of-range pages clamp.
pub fn paginate(len: usize, page: usize, page_size: usize) -> PageWindow {
    let size = page_size.max(1);
    let total = total_pages(len, size);
    let page = page.clamp(1, total);
    let start = ((page - 1) * size).min(len);
    let end = (page * size).min(len);
    PageWindow { page, total_pages: total, range: start..end }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_results_still_have_one_page() {
        let w = paginate(0, 1, 21);
        assert_eq!(w.total_pages, 1);
        assert_eq!(w.range, 0..0);
    }

    #[test]
    fn page_zero_clamps_to_first() {
        assert_eq!(paginate(30, 0, 21).page, 1);
        assert_eq!(paginate(30, 9, 21).page, 2);
        assert_eq!(paginate(30, 9, 21).range, 21..30);
    }

    #[test]
    fn unknown_chance_sorts_last_both_ways() {
        assert_eq!(cmp_chance(Some(0.1), None, false), Ordering::Less);
        assert_eq!(cmp_chance(Some(0.1), None, true), Ordering::Less);
        assert_eq!(cmp_chance(None, Some(9.0), true), Ordering::Greater);
    }
}
