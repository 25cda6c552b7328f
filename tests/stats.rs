// tests/stats.rs
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use magang_katalog::error::Error;
use magang_katalog::stats::{self, Statistics, StatsPoller};

fn sample() -> Statistics {
    Statistics { vacancies: 12_345, applicants: 2, registrants: 3, companies: 4, participants: 5 }
}

fn down() -> Error {
    Error::Status { url: "http://stats.invalid/endpoint".into(), status: 503 }
}

fn wait_for(poller: &StatsPoller, ticks: u64) {
    let start = Instant::now();
    while poller.snapshot().ticks < ticks {
        assert!(start.elapsed() < Duration::from_secs(5), "poller stalled");
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn envelope_is_unwrapped() {
    let body = r#"{"data": {
        "Jumlah Lowongan": 12345, "Jumlah Pelamar": 2, "Jumlah Pendaftar Magang": 3,
        "Jumlah Perusahaan": 4, "Jumlah Peserta Magang": 5 }}"#;
    let s = stats::parse(body).unwrap();
    assert_eq!(s, sample());
    assert_eq!(s.entries()[0], ("Jumlah Lowongan", 12_345));
}

#[test]
fn missing_counters_default_to_zero() {
    let s = stats::parse(r#"{"data": {"Jumlah Lowongan": 9}}"#).unwrap();
    assert_eq!(s.vacancies, 9);
    assert_eq!(s.participants, 0);
    assert!(stats::parse(r#"{"nope": 1}"#).is_err());
}

#[test]
fn poller_starts_loading_then_ticks() {
    let mut poller = StatsPoller::start_with(|| Ok(sample()), Duration::from_millis(10), || {});
    wait_for(&poller, 3);

    let s = poller.snapshot();
    assert!(!s.loading);
    assert_eq!(s.data, Some(sample()));
    assert_eq!(s.error, None);

    poller.stop();
    assert!(!poller.is_running());
}

#[test]
fn error_shows_until_next_success() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let poller = StatsPoller::start_with(
        move || match counter.fetch_add(1, Ordering::SeqCst) {
            0 => Err(down()),
            _ => Ok(sample()),
        },
        Duration::from_millis(10),
        || {},
    );

    wait_for(&poller, 2);
    let s = poller.snapshot();
    assert_eq!(s.error, None);
    assert_eq!(s.data, Some(sample()));
}

#[test]
fn first_failure_is_reported_inline() {
    let poller = StatsPoller::start_with(
        || Err(down()),
        Duration::from_secs(60),
        || {},
    );
    wait_for(&poller, 1);

    let s = poller.snapshot();
    assert!(!s.loading);
    assert!(s.data.is_none());
    assert!(s.error.unwrap().contains("503"));
    // drop wakes the worker out of its 60 s wait
}

#[test]
fn stop_is_idempotent_and_final() {
    let updates = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&updates);
    let mut poller = StatsPoller::start_with(
        || Ok(sample()),
        Duration::from_millis(5),
        move || {
            seen.fetch_add(1, Ordering::SeqCst);
        },
    );
    wait_for(&poller, 2);

    poller.stop();
    poller.stop();
    let after_stop = poller.snapshot().ticks;
    let notified = updates.load(Ordering::SeqCst);

    thread::sleep(Duration::from_millis(40));
    assert_eq!(poller.snapshot().ticks, after_stop);
    assert_eq!(updates.load(Ordering::SeqCst), notified);
}

#[test]
fn drop_does_not_wait_for_a_slow_fetch() {
    let started = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&started);
    let poller = StatsPoller::start_with(
        move || {
            seen.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(800));
            Ok(sample())
        },
        Duration::from_secs(60),
        || {},
    );

    let t0 = Instant::now();
    while started.load(Ordering::SeqCst) == 0 {
        assert!(t0.elapsed() < Duration::from_secs(5), "fetch never started");
        thread::sleep(Duration::from_millis(5));
    }

    let t1 = Instant::now();
    drop(poller);
    assert!(t1.elapsed() < Duration::from_millis(400));
}
