use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use evidence_tracker_configuration::{Configuration, Threshold};
use evidence_tracker_primitives::DatabaseDriver;

use crate::random;

/// This configuration is used for testing. It generates random config values
/// so they do not collide if you run more than one server at the same time.
///
/// # Panics
///
/// Will panic if it can't convert the temp file path to string.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    // Ephemeral socket address for the API
    config.http_api.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0);

    config.core.session.secret = random::string(32);

    // Ephemeral sqlite database
    let temp_directory = env::temp_dir();
    let random_db_id = random::string(16);
    let temp_file = temp_directory.join(format!("evidence_tracker_{random_db_id}.db"));
    config.core.database.driver = DatabaseDriver::Sqlite3;
    config.core.database.path = temp_file.to_str().unwrap().to_owned();

    config
}

/// Ephemeral configuration whose session tokens expire after `seconds`.
#[must_use]
pub fn ephemeral_with_session_lifetime(seconds: u64) -> Configuration {
    let mut config = ephemeral();

    config.core.session.lifetime = seconds;

    config
}
