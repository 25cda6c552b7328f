// src/source.rs
//
// Data source adapter: one read of the dataset document per session.
// `{ "data": [Vacancy, ...] }` from a local file or an http(s) URL.

use std::{
    fmt,
    path::PathBuf,
    sync::{Arc, Mutex},
    thread,
};

use serde_json::Value;
use tracing::{debug, error, info};

use crate::{core::net, error::Result, model::Vacancy};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` / `https://` → URL, anything else is a file path.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(s.to_string())
        } else {
            DataSource::File(PathBuf::from(s))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(p) => write!(f, "{}", p.display()),
            DataSource::Url(u) => f.write_str(u),
        }
    }
}

/// Read and decode the dataset. Transport and top-level JSON errors propagate;
/// a missing or non-list `data` field is an empty dataset.
pub fn fetch(source: &DataSource) -> Result<Vec<Vacancy>> {
    let text = match source {
        DataSource::File(path) => std::fs::read_to_string(path)?,
        DataSource::Url(url) => net::http_get(url)?,
    };
    parse_document(&text)
}

/// Decode a dataset document. Records that do not decode are skipped.
pub fn parse_document(text: &str) -> Result<Vec<Vacancy>> {
    let mut doc: Value = serde_json::from_str(text)?;

    let Some(Value::Array(items)) = doc.get_mut("data").map(Value::take) else {
        debug!("Source: document has no `data` list");
        return Ok(Vec::new());
    };

    let total = items.len();
    let out: Vec<Vacancy> = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value::<Vacancy>(item) {
            Ok(v) => Some(v),
            Err(e) => {
                debug!("Source: skipping record {i}: {e}");
                None
            }
        })
        .collect();

    if out.len() != total {
        info!("Source: kept {} of {} records", out.len(), total);
    }
    Ok(out)
}

/// `fetch`, with every failure logged and turned into an empty dataset.
pub fn load(source: &DataSource) -> Vec<Vacancy> {
    info!("Source: loading {source}");
    match fetch(source) {
        Ok(v) => {
            info!("Source: loaded {} vacancies", v.len());
            v
        }
        Err(e) => {
            error!("Source: failed to load {source}: {e}");
            Vec::new()
        }
    }
}

/// Background one-shot `load`.
///
/// Loading stays true until the fetch settles, whatever the outcome.
/// The result is handed out once through `take`.
pub struct Loader {
    slot: Arc<Mutex<Option<Vec<Vacancy>>>>,
    handle: Option<thread::JoinHandle<()>>,
    taken: bool,
}

impl Loader {
    pub fn spawn(source: DataSource) -> Self {
        Self::spawn_with(move || load(&source), || {})
    }

    /// Run `job` on a worker thread; `on_done` fires after the result is stored.
    pub fn spawn_with<J, D>(job: J, on_done: D) -> Self
    where
        J: FnOnce() -> Vec<Vacancy> + Send + 'static,
        D: FnOnce() + Send + 'static,
    {
        let slot = Arc::new(Mutex::new(None));
        let out = Arc::clone(&slot);

        let handle = thread::spawn(move || {
            let data = job();
            if let Ok(mut guard) = out.lock() {
                *guard = Some(data);
            }
            on_done();
        });

        Self { slot, handle: Some(handle), taken: false }
    }

    pub fn is_loading(&self) -> bool {
        !self.taken && self.slot.lock().map(|g| g.is_none()).unwrap_or(false)
    }

    /// The loaded dataset, once, as soon as it is ready.
    pub fn take(&mut self) -> Option<Vec<Vacancy>> {
        if self.taken {
            return None;
        }
        let data = self.slot.lock().ok()?.take()?;
        self.taken = true;
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
        Some(data)
    }

    /// Block until the dataset is ready (CLI, tests).
    pub fn wait(mut self) -> Vec<Vacancy> {
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
        self.slot.lock().ok().and_then(|mut g| g.take()).unwrap_or_default()
    }
}
