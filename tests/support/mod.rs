// Shared primitives for one-time server bootstrapping across integration tests.
use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};

use booking_server::domain::entities::RoomConfig;
use booking_server::domain::ports::Clock;
use booking_server::interface_adapters::state::{AppState, InMemoryDayStore};
use booking_server::use_cases::ledger::BookingLedger;
use chrono::{NaiveDate, NaiveDateTime};

// Global base URL used by all tests after the server publishes its bound address.
static SERVER_URL: OnceLock<String> = OnceLock::new();
// One-time guard that ensures the server bootstrap path runs only once.
static SERVER_READY: OnceLock<()> = OnceLock::new();

// The date every integration test books against.
pub const TEST_DATE: &str = "2025-06-16";

// Fixed time source so the bookable grid is identical on every run:
// 08:15 on the test date, which makes 09:00 the first bookable hour.
struct FixedClock(NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

fn frozen_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 16)
        .expect("valid test date")
        .and_hms_opt(8, 15, 0)
        .expect("valid test time")
}

fn test_state() -> AppState {
    AppState {
        ledger: Arc::new(BookingLedger::new(Arc::new(InMemoryDayStore::new()))),
        rooms: Arc::new(booking_server::frameworks::config::room_catalog()),
        clock: Arc::new(FixedClock(frozen_now())),
    }
}

// Helper so tests can assert against the deployed catalog.
pub fn catalog() -> Vec<RoomConfig> {
    booking_server::frameworks::config::room_catalog()
}

// Ensure the test server is running and return the shared base URL.
pub fn ensure_server() -> &'static str {
    SERVER_READY.get_or_init(|| {
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // Spawn an OS thread so the server outlives individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                // Bind to an ephemeral port to avoid collisions with local services.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{}", addr));
                booking_server::serve(listener, test_state())
                    .await
                    .expect("server failed");
            });
        });
        wait_for_server_url_and_readiness(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

// Wait for URL publication and then wait for the server socket to accept TCP connections.
fn wait_for_server_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVER_URL.set(base_url.clone());

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    // Retry for a short period to avoid racing server bind/accept.
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server did not become ready in time");
}
