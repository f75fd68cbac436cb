//! Fixtures wiring the authentication service to in-memory collaborators

use std::sync::Arc;

use crate::repositories::MockIdentityRepository;
use crate::services::auth::AuthService;
use crate::services::session::SessionManager;
use crate::services::verification::tests::{MockMailer, MockTtlStore, ScriptedGenerator};
use crate::services::verification::{CodeService, CodeServiceConfig};

pub type TestAuthService = AuthService<MockIdentityRepository, MockTtlStore, MockMailer>;

pub struct Fixture {
    pub service: TestAuthService,
    pub repository: Arc<MockIdentityRepository>,
    pub store: Arc<MockTtlStore>,
    pub mailer: Arc<MockMailer>,
    pub sessions: Arc<SessionManager>,
}

pub fn fixture() -> Fixture {
    let repository = Arc::new(MockIdentityRepository::new());
    let store = Arc::new(MockTtlStore::new());
    let mailer = Arc::new(MockMailer::new(false));
    let sessions = Arc::new(SessionManager::new("test-session-secret", 3600));
    let code_service = Arc::new(CodeService::with_generator(
        store.clone(),
        mailer.clone(),
        Arc::new(ScriptedGenerator::seeded(5)),
        CodeServiceConfig::default(),
    ));

    Fixture {
        service: AuthService::new(repository.clone(), code_service, sessions.clone()),
        repository,
        store,
        mailer,
        sessions,
    }
}
