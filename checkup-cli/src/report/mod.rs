use serde::Serialize;

use crate::suite::{ProbeSpec, Verb};

/// Sentinel status meaning "no HTTP response obtained" (connection refused,
/// DNS failure, timeout). Distinct from every real HTTP status.
pub const NO_RESPONSE: u16 = 0;

/// Reachability classification: any real response below 500 counts as wired.
/// 4xx passes on purpose — the sweep checks that routes are mounted, not
/// that they accept the harness's unauthenticated requests.
pub fn classify(status: u16) -> bool {
    status != NO_RESPONSE && status < 500
}

/// Outcome of one executed probe. `passed` is derived from `status` at
/// construction and never set independently.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    pub verb: Verb,
    pub path: String,
    pub status: u16,
    pub passed: bool,
}

impl ProbeResult {
    pub fn from_status(spec: &ProbeSpec, status: u16) -> Self {
        Self {
            verb: spec.verb,
            path: spec.path.to_string(),
            status,
            passed: classify(status),
        }
    }

    pub fn unreachable(spec: &ProbeSpec) -> Self {
        Self::from_status(spec, NO_RESPONSE)
    }
}

/// Summary counts over a run, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
}

impl Summary {
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Append-only record of a single run. Result order equals execution order,
/// which equals suite declaration order.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    results: Vec<ProbeResult>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: ProbeResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[ProbeResult] {
        &self.results
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total: self.results.len(),
            passed: self.results.iter().filter(|r| r.passed).count(),
        }
    }

    /// Render the fixed-width text report. Pure: printing goes through a
    /// [`ReportSink`].
    pub fn render(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            let marker = if result.passed { "✅" } else { "❌" };
            let status = if result.status == NO_RESPONSE {
                "---".to_string()
            } else {
                result.status.to_string()
            };
            out.push_str(&format!(
                "{} {:<6} {:<42} ({})\n",
                marker,
                result.verb.as_str(),
                result.path,
                status
            ));
        }
        let summary = self.summary();
        out.push_str(&format!(
            "\nResults: {}/{} endpoints responding\n",
            summary.passed, summary.total
        ));
        out
    }
}

/// Destination for rendered report text. Lets the runner stay silent in
/// tests without capturing process output.
pub trait ReportSink {
    fn emit(&mut self, text: &str);
}

pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&mut self, text: &str) {
        print!("{text}");
    }
}

/// Collects emitted text in memory.
#[derive(Debug, Default)]
pub struct BufferSink(pub String);

impl ReportSink for BufferSink {
    fn emit(&mut self, text: &str) {
        self.0.push_str(text);
    }
}
