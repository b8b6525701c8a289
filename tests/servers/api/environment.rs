use std::net::SocketAddr;
use std::sync::Arc;

use evidence_tracker::bootstrap::app::initialize_with_configuration;
use evidence_tracker::core::auth::session::SessionUser;
use evidence_tracker::core::auth::{password, NewUser};
use evidence_tracker::core::Registry;
use evidence_tracker::servers::apis::server::{ApiServer, Launcher, Running, Stopped};
use evidence_tracker_configuration::Configuration;
use evidence_tracker_primitives::Role;
use evidence_tracker_test_helpers::random;

use super::connection_info::ConnectionInfo;

/// Cheap bcrypt cost for test users.
const TEST_HASH_COST: u32 = 4;

pub struct Environment<S> {
    pub config: Arc<Configuration>,
    pub registry: Arc<Registry>,
    pub server: ApiServer<S>,
}

impl<S> Environment<S> {
    /// Adds a user straight to the store.
    pub async fn add_user(&self, email: &str, password: &str, role: Role) -> SessionUser {
        let new_user = NewUser {
            name: format!("Usuario {email}"),
            email: email.to_string(),
            role,
            password_hash: password::hash_with_cost(password, TEST_HASH_COST).unwrap(),
        };

        let user = new_user.clone();
        let id = self
            .registry
            .store
            .call(move |database| database.add_user(&user))
            .await
            .unwrap();

        SessionUser {
            id,
            name: new_user.name,
            email: new_user.email,
            role: new_user.role,
        }
    }

    /// Adds a user with the given role and issues a session token for it.
    pub async fn session_token_for(&self, role: Role) -> String {
        let email = format!("{}@example.com", random::string(12).to_lowercase());

        let user = self.add_user(&email, "secret", role).await;

        self.registry.sessions.encode(&user).unwrap()
    }

    /// It forces a store error by dropping all tables. That makes any query
    /// fail.
    pub async fn force_database_error(&self) {
        self.registry
            .store
            .call(|database| database.drop_database_tables())
            .await
            .unwrap();
    }
}

impl Environment<Stopped> {
    pub fn new(configuration: &Arc<Configuration>) -> Self {
        let registry = initialize_with_configuration(configuration);

        let server = ApiServer::new(Launcher::new(configuration.http_api.bind_address));

        Self {
            config: configuration.clone(),
            registry,
            server,
        }
    }

    pub fn start(self) -> Environment<Running> {
        Environment {
            config: self.config,
            registry: self.registry.clone(),
            server: self.server.start(self.registry).unwrap(),
        }
    }
}

impl Environment<Running> {
    pub async fn new(configuration: &Arc<Configuration>) -> Self {
        Environment::<Stopped>::new(configuration).start()
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            registry: self.registry,
            server: self.server.stop().await.unwrap(),
        }
    }

    pub fn get_connection_info(&self) -> ConnectionInfo {
        ConnectionInfo::anonymous(&self.server.state.binding.to_string())
    }

    pub fn get_connection_info_with_token(&self, session_token: &str) -> ConnectionInfo {
        ConnectionInfo::authenticated(&self.server.state.binding.to_string(), session_token)
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.server.state.binding
    }
}
