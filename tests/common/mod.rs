#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ConnectInfo;
use chrono::{DateTime, TimeZone, Utc};
use shortlink_store::application::services::{LinkService, StatsService};
use shortlink_store::domain::clock::{Clock, ManualClock};
use shortlink_store::infrastructure::memory::MemoryLinkStore;
use shortlink_store::state::AppState;
use shortlink_store::utils::code_generator::CodeGenerator;

/// Base URL rendered into short links by the test services.
pub const TEST_BASE_URL: &str = "http://sho.rt";

/// Default validity the test services apply when a request omits one.
pub const TEST_DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// The instant every test clock starts at.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}

/// A fully wired application state plus handles to the seams the tests
/// drive directly: the store (for inspection) and the manual clock (for
/// walking across expiry boundaries).
pub struct TestApp {
    pub state: AppState,
    pub store: Arc<MemoryLinkStore>,
    pub clock: Arc<ManualClock>,
}

pub fn create_test_state() -> TestApp {
    let store = Arc::new(MemoryLinkStore::new());
    let clock = Arc::new(ManualClock::new(start_time()));
    let clock_handle: Arc<dyn Clock> = clock.clone();

    let link_service = Arc::new(LinkService::new(
        store.clone(),
        CodeGenerator::with_seed(42),
        clock_handle.clone(),
        TEST_BASE_URL.to_string(),
        TEST_DEFAULT_VALIDITY_MINUTES,
    ));
    let stats_service = Arc::new(StatsService::new(
        store.clone(),
        store.clone(),
        clock_handle,
    ));

    TestApp {
        state: AppState {
            link_service,
            stats_service,
        },
        store,
        clock,
    }
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work under
/// `axum-test` without a real socket.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
