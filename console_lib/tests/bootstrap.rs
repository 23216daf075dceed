use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use console_lib::types::PlanType;
use console_lib::{
    connect, App, Bootstrap, BuildMode, ConsoleConfig, ConsoleError, Globals, MountTarget,
    StartupFetch, COMPONENTS, MOUNT_ANCHOR,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Fetches that settle after fixed delays; one of them can fail.
struct ScriptedFetch {
    delays_ms: [u64; 4],
    failing: Option<usize>,
    settled: Arc<AtomicUsize>,
}

impl ScriptedFetch {
    async fn step(&self, index: usize) -> Result<(), ConsoleError> {
        tokio::time::sleep(Duration::from_millis(self.delays_ms[index])).await;
        self.settled.fetch_add(1, Ordering::SeqCst);
        if self.failing == Some(index) {
            return Err(ConsoleError::InvalidInput(format!("step {index} rejected")));
        }
        Ok(())
    }
}

impl StartupFetch for ScriptedFetch {
    async fn fetch_server_info(&self) -> Result<(), ConsoleError> {
        self.step(0).await
    }

    async fn fetch_settings(&self) -> Result<(), ConsoleError> {
        self.step(1).await
    }

    async fn fetch_current_plan(&self) -> Result<(), ConsoleError> {
        self.step(2).await
    }

    async fn restore_user_session(&self) -> Result<(), ConsoleError> {
        self.step(3).await
    }
}

/// Records how many fetches had settled at each mount.
struct RecordingTarget {
    settled: Arc<AtomicUsize>,
    mounts: Mutex<Vec<usize>>,
}

impl RecordingTarget {
    fn new(settled: Arc<AtomicUsize>) -> Self {
        Self {
            settled,
            mounts: Mutex::new(Vec::new()),
        }
    }
}

impl MountTarget for RecordingTarget {
    fn mount(&self, anchor: &str, app: &App) -> Result<(), ConsoleError> {
        assert_eq!(anchor, MOUNT_ANCHOR);
        assert_eq!(app.components().len(), COMPONENTS.len());
        self.mounts
            .lock()
            .unwrap()
            .push(self.settled.load(Ordering::SeqCst));
        Ok(())
    }
}

async fn run(delays_ms: [u64; 4], failing: Option<usize>) -> (Vec<usize>, Vec<&'static str>) {
    let settled = Arc::new(AtomicUsize::new(0));
    let fetch = ScriptedFetch {
        delays_ms,
        failing,
        settled: settled.clone(),
    };
    let target = RecordingTarget::new(settled);
    let mounted = Bootstrap::new(fetch, Globals::new(BuildMode::release()))
        .initialize(&target)
        .await
        .unwrap();
    let failed = mounted.settle_report().failed.clone();
    let mounts = target.mounts.lock().unwrap().clone();
    (mounts, failed)
}

#[tokio::test(start_paused = true)]
async fn mounts_once_after_all_settle() {
    let (mounts, failed) = run([30, 10, 20, 5], None).await;
    assert_eq!(mounts, vec![4]);
    assert!(failed.is_empty());
}

#[tokio::test(start_paused = true)]
async fn one_rejection_does_not_block_mount() {
    for failing in 0..4 {
        let (mounts, failed) = run([40, 10, 25, 5], Some(failing)).await;
        assert_eq!(mounts, vec![4], "failing step {failing}");
        assert_eq!(failed.len(), 1);
    }
}

#[tokio::test(start_paused = true)]
async fn settlement_order_does_not_matter() {
    let orders = [
        [1, 2, 3, 4],
        [4, 3, 2, 1],
        [2, 4, 1, 3],
        [0, 0, 0, 0],
    ];
    for delays in orders {
        let (mounts, failed) = run(delays, Some(2)).await;
        assert_eq!(mounts, vec![4]);
        assert_eq!(failed, vec!["plan/fetchCurrentPlan"]);
    }
}

#[tokio::test(start_paused = true)]
async fn fetches_run_concurrently() {
    let start = tokio::time::Instant::now();
    run([100, 100, 100, 100], None).await;
    assert!(start.elapsed() < Duration::from_millis(200));
}

#[tokio::test(start_paused = true)]
async fn registers_directives_and_helpers() {
    let settled = Arc::new(AtomicUsize::new(0));
    let fetch = ScriptedFetch {
        delays_ms: [0; 4],
        failing: None,
        settled: settled.clone(),
    };
    let target = RecordingTarget::new(settled);
    let mounted = Bootstrap::new(fetch, Globals::new(BuildMode::development()))
        .initialize(&target)
        .await
        .unwrap();

    let app = mounted.app();
    assert_eq!(app.directive_names(), vec!["data-source-type", "highlight"]);
    assert_eq!(app.render("data-source-type", "RO").as_deref(), Some("Read only"));
    assert!(app.globals().is_dev());
    assert!(!app.globals().is_release());
    assert_eq!(app.globals().urlfy("example.com"), "http://example.com");
    assert!(app.stores().is_none());
}

#[tokio::test]
async fn boots_against_backend_with_partial_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/actuator/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "version": "0.5.0",
            "host": mock_server.uri(),
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/setting"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "bb.branding.logo", "value": "logo.png"}
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/plan"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "plan service down"})),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/principal/200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 200,
            "name": "Jane Doe",
            "email": "jane@example.com"
        })))
        .mount(&mock_server)
        .await;

    let config = ConsoleConfig {
        base_url: mock_server.uri(),
        mode: BuildMode::release(),
        timeout: Duration::from_secs(2),
        user_id: Some(200),
    };
    let (client, stores) = connect(&config).unwrap();
    let target = RecordingTarget::new(Arc::new(AtomicUsize::new(4)));

    let mounted = Bootstrap::new(stores.fetcher(&client), Globals::new(config.mode))
        .with_stores(stores.clone())
        .initialize(&target)
        .await
        .unwrap();

    assert_eq!(target.mounts.lock().unwrap().len(), 1);
    assert!(mounted.settle_report().all_succeeded());
    assert_eq!(stores.actuator.host(), Some(mock_server.uri()));
    assert_eq!(stores.setting.get("bb.branding.logo").unwrap().value, "logo.png");
    assert_eq!(stores.plan.current(), PlanType::Free);
    assert_eq!(stores.session.current_user().unwrap().email, "jane@example.com");

    let notifications = stores.notification.drain();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "plan service down");
    assert!(mounted.app().stores().is_some());
}

#[tokio::test]
async fn boots_when_backend_is_unreachable() {
    let config = ConsoleConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        mode: BuildMode::release(),
        timeout: Duration::from_secs(2),
        user_id: Some(200),
    };
    let (client, stores) = connect(&config).unwrap();
    let target = RecordingTarget::new(Arc::new(AtomicUsize::new(4)));

    let mounted = Bootstrap::new(stores.fetcher(&client), Globals::new(config.mode))
        .initialize(&target)
        .await
        .unwrap();

    assert_eq!(target.mounts.lock().unwrap().len(), 1);
    assert_eq!(mounted.settle_report().failed.len(), 4);
    assert!(stores.session.current_user().is_none());
}
