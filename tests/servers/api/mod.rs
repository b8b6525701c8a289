use evidence_tracker::servers::apis::server;

pub mod connection_info;
pub mod environment;

pub type Started = environment::Environment<server::Running>;
