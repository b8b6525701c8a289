pub mod auth;
pub mod case;
pub mod evidence;
pub mod health_check;
pub mod report;
