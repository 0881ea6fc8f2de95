use std::time::Duration;

use checkup_cli::output::write_output;
use checkup_cli::types::{CheckupCommands, OutputArgs, OutputFormat, TargetArgs};
use checkup_cli::{
    BufferSink, CheckupCli, NO_RESPONSE, ProbeClient, ProbeSpec, RunReport, exit_code, run_suite,
    v2_suite,
};
use checkup_dev::{StubBehavior, v2_router};
use tokio::net::TcpListener;

const TIMEOUT: Duration = Duration::from_secs(5);

async fn spawn_stub(behavior: StubBehavior) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, v2_router(behavior)).await.unwrap();
    });
    format!("http://{addr}")
}

async fn sweep(base_url: &str) -> RunReport {
    let client = ProbeClient::new(base_url, TIMEOUT).unwrap();
    let mut report = RunReport::new();
    run_suite(&client, &v2_suite(), &mut report).await;
    report
}

#[tokio::test]
async fn healthy_target_passes_every_probe() {
    let base_url = spawn_stub(StubBehavior::new()).await;
    let report = sweep(&base_url).await;

    let summary = report.summary();
    assert_eq!(summary.total, 15);
    assert_eq!(summary.passed, 15);
    assert_eq!(exit_code(&report), 0);

    let mut sink = BufferSink::default();
    write_output(&report, &OutputFormat::Text, &mut sink).unwrap();
    assert!(sink.0.contains("Results: 15/15 endpoints responding"));
}

#[tokio::test]
async fn not_found_counts_as_reachable() {
    let behavior = StubBehavior::new().respond_with("/api/v2/payments/1/receipt", 404);
    let base_url = spawn_stub(behavior).await;
    let report = sweep(&base_url).await;

    let receipt = report
        .results()
        .iter()
        .find(|r| r.path == "/api/v2/payments/1/receipt")
        .unwrap();
    assert_eq!(receipt.status, 404);
    assert!(receipt.passed);
    assert_eq!(report.summary().passed, 15);
    assert_eq!(exit_code(&report), 0);
}

#[tokio::test]
async fn server_error_fails_only_that_probe() {
    let behavior = StubBehavior::new().fail("/api/v2/admin/settings");
    let base_url = spawn_stub(behavior).await;
    let report = sweep(&base_url).await;

    let summary = report.summary();
    assert_eq!(summary.total, 15);
    assert_eq!(summary.passed, 14);
    assert_eq!(exit_code(&report), 1);

    let settings = report
        .results()
        .iter()
        .find(|r| r.path == "/api/v2/admin/settings")
        .unwrap();
    assert_eq!(settings.status, 500);
    assert!(!settings.passed);
}

#[tokio::test]
async fn unreachable_target_records_sentinels_for_everything() {
    // bind then drop to get a port that refuses connections
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let report = sweep(&format!("http://{addr}")).await;

    let summary = report.summary();
    assert_eq!(summary.total, 15);
    assert_eq!(summary.passed, 0);
    assert_eq!(exit_code(&report), 1);
    assert!(
        report
            .results()
            .iter()
            .all(|r| r.status == NO_RESPONSE && !r.passed)
    );
}

#[tokio::test]
async fn report_order_matches_declaration_order() {
    let base_url = spawn_stub(StubBehavior::new()).await;
    let report = sweep(&base_url).await;

    let declared: Vec<(&str, &str)> = v2_suite()
        .iter()
        .flat_map(|g| g.probes.clone())
        .map(|p| (p.verb.as_str(), p.path))
        .collect();
    let observed: Vec<(String, String)> = report
        .results()
        .iter()
        .map(|r| (r.verb.as_str().to_string(), r.path.clone()))
        .collect();

    assert_eq!(
        observed,
        declared
            .into_iter()
            .map(|(v, p)| (v.to_string(), p.to_string()))
            .collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn hung_connection_times_out_into_a_sentinel() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((socket, _)) = listener.accept().await else {
                break;
            };
            // hold the connection open without ever answering
            tokio::spawn(async move {
                let _socket = socket;
                tokio::time::sleep(Duration::from_secs(60)).await;
            });
        }
    });

    let client =
        ProbeClient::new(&format!("http://{addr}"), Duration::from_millis(300)).unwrap();
    let result = client.execute(&ProbeSpec::get("/api/v2/auth/me")).await;

    assert_eq!(result.status, NO_RESPONSE);
    assert!(!result.passed);
}

#[tokio::test]
async fn fatal_configuration_error_maps_to_exit_one() {
    // scheme-less target never reaches the network; the top boundary turns
    // the construction error into exit code 1
    let cli = CheckupCli {
        command: CheckupCommands::Run {
            target: TargetArgs {
                url: Some("/not/an/origin".parse().unwrap()),
                timeout_secs: None,
            },
            output: OutputArgs {
                output: OutputFormat::Text,
            },
        },
    };
    assert_eq!(checkup_cli::run(cli).await, 1);
}
