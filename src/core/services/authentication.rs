//! Login service.
//!
//! Both failure paths (unknown email, wrong password) return the same
//! [`Error::InvalidCredentials`] and take comparable time: an unknown email
//! still runs one bcrypt verification.
use std::panic::Location;

use tracing::debug;

use crate::core::auth::password;
use crate::core::auth::session::SessionUser;
use crate::core::error::Error;
use crate::core::non_blank;
use crate::core::Registry;

/// A successful login.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Login {
    pub token: String,
    pub user: SessionUser,
}

/// Verifies the credentials and issues a session token.
///
/// # Errors
///
/// Will return:
///
/// - `Error::MissingCredentials` if the email or the password is missing or
///   blank.
/// - `Error::InvalidCredentials` if the email is unknown or the password does
///   not match.
/// - `Error::Upstream` or `Error::Timeout` if the store fails.
pub async fn login(registry: &Registry, email: Option<&str>, password: Option<&str>) -> Result<Login, Error> {
    let (Some(email), Some(password)) = (non_blank(email), password.filter(|password| !password.is_empty())) else {
        return Err(Error::MissingCredentials {
            location: Location::caller(),
        });
    };

    let email = email.to_string();
    let user = registry
        .store
        .call(move |database| database.get_user_by_email(&email))
        .await?;

    let password = password.to_string();
    let (user, password_matches) = tokio::task::spawn_blocking(move || match user {
        Some(user) => {
            let matches = password::verify(&password, &user.password_hash);
            (Some(user), matches)
        }
        None => {
            password::verify_against_dummy_hash(&password);
            (None, false)
        }
    })
    .await
    .map_err(Error::upstream)?;

    let user = match user {
        Some(user) if password_matches => user,
        _ => {
            debug!("login rejected");
            return Err(Error::InvalidCredentials {
                location: Location::caller(),
            });
        }
    };

    let session_user = SessionUser {
        id: user.id,
        name: user.name,
        email: user.email,
        role: user.role,
    };

    let token = registry.sessions.encode(&session_user).map_err(Error::upstream)?;

    Ok(Login {
        token,
        user: session_user,
    })
}
