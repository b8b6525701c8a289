//! API resources for the [`auth`](crate::servers::apis::v1::context::auth) API context.
use evidence_tracker_primitives::Role;
use serde::{Deserialize, Serialize};

use crate::core::auth::session::SessionUser;
use crate::core::services::authentication::Login;

/// The user identity returned on login.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct User {
    pub id_usuario: i64,
    pub nombre: String,
    pub email: String,
    pub rol: Role,
}

impl From<SessionUser> for User {
    fn from(user: SessionUser) -> Self {
        Self {
            id_usuario: user.id.0,
            nombre: user.name,
            email: user.email,
            rol: user.role,
        }
    }
}

/// A session token and the user it was issued for.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl From<Login> for Session {
    fn from(login: Login) -> Self {
        Self {
            token: login.token,
            user: login.user.into(),
        }
    }
}

/// The answer of the session check.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Access {
    pub message: String,
    pub user: User,
}
