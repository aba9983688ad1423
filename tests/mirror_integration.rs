//! End-to-end test: poller output served through the display mirror.

use feedwatch::config::MirrorConfig;
use feedwatch::display::{DisplayTarget, MemoryDisplay, TeeDisplay};
use feedwatch::metrics::PrometheusBuilder;
use feedwatch::mirror::{self, MirrorState};
use feedwatch::poller::{Poller, PollerConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_mirror_serves_polled_text() {
    let feed = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gold_gpt_data.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("SIGNAL: AVOID\n"))
        .mount(&feed)
        .await;

    let memory = MemoryDisplay::new("gptOutput");
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let state = Arc::new(MirrorState::with_handle(memory.clone(), handle));

    let mirror_config = MirrorConfig {
        enabled: true,
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let listener = mirror::bind(&mirror_config).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let cancel = CancellationToken::new();
    let server = tokio::spawn(mirror::serve(listener, state, cancel.clone()));

    let side = MemoryDisplay::new("side");
    let display: Arc<dyn DisplayTarget> =
        Arc::new(TeeDisplay::new(vec![Arc::new(memory), Arc::new(side.clone())]));
    let config = PollerConfig {
        base_url: feed.uri(),
        interval_ms: 100,
        ..Default::default()
    };
    let poller = Poller::new(&config, display).unwrap();
    let poller_handle = poller.start(cancel.clone());

    tokio::time::sleep(Duration::from_millis(250)).await;

    let body = reqwest::get(format!("http://{}/display", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "SIGNAL: AVOID\n");
    assert_eq!(side.content(), "SIGNAL: AVOID\n");

    cancel.cancel();
    poller_handle.await.unwrap();
    server.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_bind_conflict_reports_address() {
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = taken.local_addr().unwrap().port();

    let config = MirrorConfig {
        enabled: true,
        host: "127.0.0.1".to_string(),
        port,
    };

    let err = mirror::bind(&config).await.unwrap_err();
    assert!(err.to_string().contains(&format!("127.0.0.1:{}", port)));
}
