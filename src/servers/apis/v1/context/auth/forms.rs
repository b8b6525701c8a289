use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}
