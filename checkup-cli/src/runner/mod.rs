use tracing::{debug, info};

use crate::client::ProbeClient;
use crate::report::RunReport;
use crate::suite::DomainGroup;

/// Execute every group in declared order, recording each outcome.
/// Individual failures never short-circuit the sweep: the point of a run is
/// a complete health snapshot.
pub async fn run_suite(client: &ProbeClient, groups: &[DomainGroup], report: &mut RunReport) {
    for group in groups {
        info!(group = group.name, probes = group.probes.len(), "probing domain");
        for spec in &group.probes {
            let result = client.execute(spec).await;
            debug!(
                path = result.path,
                status = result.status,
                passed = result.passed,
                "recorded"
            );
            report.record(result);
        }
    }
}

/// Exit-code contract: 0 iff every declared probe passed.
pub fn exit_code(report: &RunReport) -> i32 {
    if report.summary().all_passed() { 0 } else { 1 }
}
