#![allow(dead_code)]

use axum_test::TestServer;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use snip::application::services::LinkService;
use snip::config::Config;
use snip::domain::code_generator::CodeGenerator;
use snip::domain::repositories::LinkRepository;
use snip::infrastructure::persistence;
use snip::routes::router;
use snip::state::AppState;

/// Base URL used by handler tests so short URLs are predictable.
pub const PUBLIC_BASE_URL: &str = "http://sho.rt";

/// A migrated SQLite database in a temporary directory.
///
/// The directory is removed when this value is dropped, so keep it alive for
/// the duration of the test.
pub struct TestDb {
    pub repository: Arc<dyn LinkRepository>,
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.db");

        let config = Config {
            database_url: format!("sqlite://{}", path.display()),
            db_max_connections: 8,
            ..Config::default()
        };

        let repository = persistence::connect(&config).await.unwrap();

        Self {
            repository,
            _dir: dir,
        }
    }

    pub fn service(&self) -> LinkService<dyn LinkRepository> {
        LinkService::new(self.repository.clone())
    }
}

/// Generator returning a fixed sequence of codes, then `fallback` forever.
pub struct ScriptedGenerator {
    codes: Mutex<VecDeque<String>>,
    fallback: String,
}

impl ScriptedGenerator {
    pub fn new(codes: &[&str], fallback: &str) -> Arc<Self> {
        Arc::new(Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            fallback: fallback.to_string(),
        })
    }
}

impl CodeGenerator for ScriptedGenerator {
    fn generate(&self) -> String {
        self.codes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

pub fn create_test_state(service: LinkService<dyn LinkRepository>) -> AppState {
    AppState::new(Arc::new(service), Some(PUBLIC_BASE_URL.to_string()))
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}
