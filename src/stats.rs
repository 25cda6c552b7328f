// src/stats.rs
//
// Aggregate statistics banner data: one remote endpoint, polled on a
// background thread for as long as the poller is alive.

use std::{
    sync::{
        Arc, Mutex,
        mpsc::{self, RecvTimeoutError, Sender},
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{core::net, error::Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(rename = "Jumlah Lowongan", default)]
    pub vacancies: u64,
    #[serde(rename = "Jumlah Pelamar", default)]
    pub applicants: u64,
    #[serde(rename = "Jumlah Pendaftar Magang", default)]
    pub registrants: u64,
    #[serde(rename = "Jumlah Perusahaan", default)]
    pub companies: u64,
    #[serde(rename = "Jumlah Peserta Magang", default)]
    pub participants: u64,
}

impl Statistics {
    /// (label, value) pairs in banner order.
    pub fn entries(&self) -> [(&'static str, u64); 5] {
        [
            ("Jumlah Lowongan", self.vacancies),
            ("Jumlah Pelamar", self.applicants),
            ("Jumlah Pendaftar Magang", self.registrants),
            ("Jumlah Perusahaan", self.companies),
            ("Jumlah Peserta Magang", self.participants),
        ]
    }
}

#[derive(Deserialize)]
struct Envelope {
    data: Statistics,
}

pub fn parse(body: &str) -> Result<Statistics> {
    Ok(serde_json::from_str::<Envelope>(body)?.data)
}

pub fn fetch(url: &str) -> Result<Statistics> {
    parse(&net::http_get(url)?)
}

/// What the banner shows. Written by the poller thread, read by the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsState {
    /// True until the first fetch settles
    pub loading: bool,
    pub data: Option<Statistics>,
    pub error: Option<String>,
    /// Completed fetches, successful or not
    pub ticks: u64,
}

/// Fetches immediately, then once per `interval`, until stopped.
///
/// The worker is signalled exactly once: by `stop`, which also joins it, or
/// on drop, which does not wait. A fetch in flight at drop finishes on the
/// detached thread and the loop exits right after.
pub struct StatsPoller {
    state: Arc<Mutex<StatsState>>,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl StatsPoller {
    /// `on_update` runs on the worker after every fetch (e.g. request a repaint).
    pub fn start_with<F, U>(fetch: F, interval: Duration, on_update: U) -> Self
    where
        F: Fn() -> Result<Statistics> + Send + 'static,
        U: Fn() + Send + 'static,
    {
        let state = Arc::new(Mutex::new(StatsState { loading: true, ..StatsState::default() }));
        let shared = Arc::clone(&state);
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            info!("Stats: poller started (every {}s)", interval.as_secs());
            loop {
                let res = fetch();
                if let Ok(mut s) = shared.lock() {
                    s.loading = false;
                    s.ticks += 1;
                    match res {
                        Ok(data) => {
                            debug!("Stats: {:?}", data);
                            s.data = Some(data);
                            s.error = None;
                        }
                        Err(e) => {
                            error!("Stats: fetch failed: {e}");
                            s.error = Some(e.to_string());
                        }
                    }
                }
                on_update();

                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    // explicit stop, or the poller was dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            info!("Stats: poller stopped");
        });

        Self { state, stop_tx: Some(stop_tx), handle: Some(handle) }
    }

    pub fn snapshot(&self) -> StatsState {
        self.state.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Signal the worker and wait for it. Later calls do nothing.
    pub fn stop(&mut self) {
        let Some(handle) = self.handle.take() else { return };
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        let _ = handle.join();
    }
}

impl Drop for StatsPoller {
    // dropped on the UI thread at shutdown; must not block on the network
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        self.handle.take();
    }
}
