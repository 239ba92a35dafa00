use std::ops::Range;
use std::sync::Mutex;
use std::thread;

use crate::error::{Error, Result};
use crate::prober::{Probe, ProbeOutcome};

/// Outcome of a completed scan, read only after every worker has joined.
#[derive(Debug)]
pub struct ScanReport {
    pub total_scanned: usize,
    pub findings: Vec<String>,
}

/// Split `total` indices into contiguous chunks, one per worker. The thread
/// count is clamped to `[1, total]`; the division remainder goes entirely to
/// the last chunk so every index is covered exactly once.
fn partition(total: usize, threads: usize) -> Vec<Range<usize>> {
    let threads = threads.clamp(1, total);
    let chunk_size = total / threads;
    let remainder = total % threads;

    let mut chunks = Vec::with_capacity(threads);
    let mut start = 0;
    for i in 0..threads {
        let mut end = start + chunk_size;
        if i == threads - 1 {
            end += remainder;
        }
        chunks.push(start..end);
        start = end;
    }
    chunks
}

/// Runs one full scan to completion over a fixed pool of worker threads.
pub struct ScanEngine<P: Probe> {
    prober: P,
}

impl<P: Probe> ScanEngine<P> {
    pub fn new(prober: P) -> Self {
        Self { prober }
    }

    /// Probe every target once and collect the exposed URLs. Spawns one
    /// worker thread per chunk and blocks until all of them have finished;
    /// no partial results are visible before that point.
    pub fn run(&self, targets: &[String], threads: usize) -> Result<ScanReport> {
        if targets.is_empty() {
            return Err(Error::EmptyCollection);
        }

        let chunks = partition(targets.len(), threads);
        log::info!("[engine] scan_starting: targets={} workers={}", targets.len(), chunks.len());

        let findings = Mutex::new(Vec::new());

        thread::scope(|scope| {
            for (i, chunk) in chunks.into_iter().enumerate() {
                let targets = &targets[chunk.clone()];
                let findings = &findings;
                let prober = &self.prober;
                scope.spawn(move || {
                    log::debug!("[engine] worker_started: id={} range={:?}", i, chunk);
                    for target in targets {
                        if let ProbeOutcome::Exposed(url) = prober.probe(target) {
                            findings.lock().unwrap().push(url);
                        }
                    }
                    log::debug!("[engine] worker_finished: id={}", i);
                });
            }
        });

        // Scope exit is the join barrier; the lock is uncontended from here.
        let findings = findings.into_inner().unwrap();
        log::info!("[engine] scan_complete: scanned={} findings={}", targets.len(), findings.len());

        Ok(ScanReport {
            total_scanned: targets.len(),
            findings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Test double: classifies by a fixed predicate and records every target
    /// it was asked to probe.
    struct StubProber<F: Fn(&str) -> ProbeOutcome + Send + Sync> {
        classify: F,
        probed: Mutex<Vec<String>>,
    }

    impl<F: Fn(&str) -> ProbeOutcome + Send + Sync> StubProber<F> {
        fn new(classify: F) -> Self {
            Self {
                classify,
                probed: Mutex::new(Vec::new()),
            }
        }
    }

    impl<F: Fn(&str) -> ProbeOutcome + Send + Sync> Probe for StubProber<F> {
        fn probe(&self, target: &str) -> ProbeOutcome {
            self.probed.lock().unwrap().push(target.to_string());
            (self.classify)(target)
        }
    }

    fn targets(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("http://host{}.test", i)).collect()
    }

    #[test]
    fn test_partition_covers_all_indices() {
        for total in 1..=50 {
            for threads in 1..=total {
                let chunks = partition(total, threads);
                assert_eq!(chunks.len(), threads);

                let mut next = 0;
                for chunk in &chunks {
                    assert_eq!(chunk.start, next, "total={} threads={}", total, threads);
                    next = chunk.end;
                }
                assert_eq!(next, total);

                // All chunks equal except the last, which absorbs the remainder.
                let chunk_size = total / threads;
                for chunk in &chunks[..threads - 1] {
                    assert_eq!(chunk.len(), chunk_size);
                }
                assert_eq!(chunks[threads - 1].len(), chunk_size + total % threads);
            }
        }
    }

    #[test]
    fn test_partition_clamps_excess_threads() {
        let chunks = partition(5, 50);
        assert_eq!(chunks.len(), 5);
        assert!(chunks.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn test_empty_collection_rejected() {
        let engine = ScanEngine::new(StubProber::new(|_: &str| ProbeOutcome::NotExposed));
        assert!(matches!(engine.run(&[], 4), Err(Error::EmptyCollection)));
        assert!(engine.prober.probed.lock().unwrap().is_empty());
    }

    #[test]
    fn test_every_target_probed_exactly_once() {
        let targets = targets(97);
        for threads in [1, 3, 8, 97] {
            let engine = ScanEngine::new(StubProber::new(|_: &str| ProbeOutcome::NotExposed));
            let report = engine.run(&targets, threads).unwrap();
            assert_eq!(report.total_scanned, 97);

            let mut probed = engine.prober.probed.lock().unwrap().clone();
            probed.sort();
            let mut expected = targets.clone();
            expected.sort();
            assert_eq!(probed, expected, "threads={}", threads);
        }
    }

    #[test]
    fn test_concurrent_appends_lose_nothing() {
        // One worker per target; every third target is exposed.
        let targets = targets(1000);
        let expected: HashSet<String> = targets
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 3 == 0)
            .map(|(_, t)| format!("{}/.git/HEAD", t))
            .collect();

        for _ in 0..5 {
            let engine = ScanEngine::new(StubProber::new(|target: &str| {
                let idx: usize = target
                    .trim_start_matches("http://host")
                    .trim_end_matches(".test")
                    .parse()
                    .unwrap();
                if idx % 3 == 0 {
                    ProbeOutcome::Exposed(format!("{}/.git/HEAD", target))
                } else {
                    ProbeOutcome::NotExposed
                }
            }));

            let report = engine.run(&targets, 1000).unwrap();
            let found: HashSet<String> = report.findings.into_iter().collect();
            assert_eq!(found.len(), expected.len());
            assert_eq!(found, expected);
        }
    }

    #[test]
    fn test_transport_errors_absorbed() {
        let targets = targets(10);
        let engine = ScanEngine::new(StubProber::new(|target: &str| {
            if target.contains("host0") {
                ProbeOutcome::Exposed(format!("{}/.git/HEAD", target))
            } else {
                ProbeOutcome::TransportError
            }
        }));

        let report = engine.run(&targets, 4).unwrap();
        assert_eq!(report.total_scanned, 10);
        assert_eq!(report.findings, vec!["http://host0.test/.git/HEAD"]);
    }
}
