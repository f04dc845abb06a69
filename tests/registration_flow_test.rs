//! Integration tests for the registration submission workflow.
//!
//! These tests wire the real controller against hand-written collaborators
//! so the whole validate -> load -> call -> notify/navigate path is
//! exercised without a network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;
use uuid::Uuid;

use buydot_client::config::{GENERIC_FAILURE_MESSAGE, MSG_REGISTERED, MSG_USERNAME_REQUIRED};
use buydot_client::{
    ApiError, ApiResult, AuthSession, BackendApi, Credentials, Navigator, Notifier, Page,
    Position, Product, RegistrationController, RegistrationForm, Severity,
};

// =============================================================================
// Hand-written collaborators
// =============================================================================

/// Records every notification instead of displaying it.
#[derive(Default)]
struct RecordingNotifier {
    emitted: Mutex<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    fn emitted(&self) -> Vec<(String, Severity)> {
        self.emitted.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn enqueue(&self, message: &str, severity: Severity, _position: Position) -> Uuid {
        self.emitted
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
        Uuid::new_v4()
    }
}

/// Records navigation targets.
#[derive(Default)]
struct RecordingNavigator {
    visited: Mutex<Vec<Page>>,
}

impl RecordingNavigator {
    fn visited(&self) -> Vec<Page> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, page: Page) {
        self.visited.lock().unwrap().push(page);
    }
}

/// Backend that returns a scripted register result and counts calls.
struct ScriptedBackend {
    calls: AtomicUsize,
    script: Box<dyn Fn() -> ApiResult<u16> + Send + Sync>,
}

impl ScriptedBackend {
    fn new(script: impl Fn() -> ApiResult<u16> + Send + Sync + 'static) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            script: Box::new(script),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BackendApi for ScriptedBackend {
    async fn register(&self, _credentials: &Credentials) -> ApiResult<u16> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.script)()
    }

    async fn login(&self, _credentials: &Credentials) -> ApiResult<AuthSession> {
        panic!("login is not exercised by these tests");
    }

    async fn checkout(&self, _address: &str) -> ApiResult<u16> {
        panic!("checkout is not exercised by these tests");
    }

    async fn list_products(&self) -> ApiResult<Vec<Product>> {
        panic!("list_products is not exercised by these tests");
    }
}

/// Backend whose register call parks until the test releases it, to observe
/// the in-flight loading state.
#[derive(Default)]
struct GatedBackend {
    calls: AtomicUsize,
    entered: Notify,
    release: Notify,
}

#[async_trait]
impl BackendApi for GatedBackend {
    async fn register(&self, _credentials: &Credentials) -> ApiResult<u16> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.release.notified().await;
        Ok(201)
    }

    async fn login(&self, _credentials: &Credentials) -> ApiResult<AuthSession> {
        panic!("login is not exercised by these tests");
    }

    async fn checkout(&self, _address: &str) -> ApiResult<u16> {
        panic!("checkout is not exercised by these tests");
    }

    async fn list_products(&self) -> ApiResult<Vec<Product>> {
        panic!("list_products is not exercised by these tests");
    }
}

fn valid_form() -> RegistrationForm {
    RegistrationForm::new("crio-user", "learnbydoing", "learnbydoing")
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn invalid_form_never_reaches_the_backend() {
    let backend = Arc::new(ScriptedBackend::new(|| Ok(201)));
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let controller =
        RegistrationController::new(backend.clone(), notifier.clone(), navigator.clone());

    controller
        .submit(&RegistrationForm::new("", "learnbydoing", "learnbydoing"))
        .await;

    assert_eq!(backend.calls(), 0);
    assert_eq!(
        notifier.emitted(),
        vec![(MSG_USERNAME_REQUIRED.to_string(), Severity::Warning)]
    );
    assert!(navigator.visited().is_empty());
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn created_response_navigates_to_login_with_one_success_notification() {
    let backend = Arc::new(ScriptedBackend::new(|| Ok(201)));
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let controller =
        RegistrationController::new(backend.clone(), notifier.clone(), navigator.clone());

    controller.submit(&valid_form()).await;

    assert_eq!(backend.calls(), 1);
    assert_eq!(
        notifier.emitted(),
        vec![(MSG_REGISTERED.to_string(), Severity::Success)]
    );
    assert_eq!(navigator.visited(), vec![Page::Login]);
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn duplicate_username_rejection_is_surfaced_verbatim() {
    let backend = Arc::new(ScriptedBackend::new(|| {
        Err(ApiError::client_request(400, "Username already exists"))
    }));
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let controller =
        RegistrationController::new(backend.clone(), notifier.clone(), navigator.clone());

    controller.submit(&valid_form()).await;

    assert_eq!(
        notifier.emitted(),
        vec![("Username already exists".to_string(), Severity::Error)]
    );
    assert!(navigator.visited().is_empty());
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn network_level_failure_shows_the_generic_message() {
    let backend = Arc::new(ScriptedBackend::new(|| {
        Err(ApiError::transport("connection refused"))
    }));
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let controller =
        RegistrationController::new(backend.clone(), notifier.clone(), navigator.clone());

    controller.submit(&valid_form()).await;

    assert_eq!(
        notifier.emitted(),
        vec![(GENERIC_FAILURE_MESSAGE.to_string(), Severity::Error)]
    );
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn loading_is_true_only_while_the_request_is_in_flight() {
    let backend = Arc::new(GatedBackend::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let controller = Arc::new(RegistrationController::new(
        backend.clone(),
        notifier.clone(),
        navigator.clone(),
    ));

    assert!(!controller.is_loading());

    let task = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit(&valid_form()).await }
    });

    backend.entered.notified().await;
    assert!(controller.is_loading());

    // Re-entrant submission while one is pending is a no-op.
    controller.submit(&valid_form()).await;
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);

    backend.release.notify_one();
    task.await.unwrap();

    assert!(!controller.is_loading());
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        notifier.emitted(),
        vec![(MSG_REGISTERED.to_string(), Severity::Success)]
    );
    assert_eq!(navigator.visited(), vec![Page::Login]);
}
