//! Setting Endpoint

use serde::Serialize;

use super::{Api, Endpoint};
use crate::error::ApiError;
use crate::models::Outcome;

#[derive(Serialize)]
pub struct PasswordChange<'a> {
    /// Current password
    pub password: &'a str,
    pub password1: &'a str,
    pub password2: &'a str,
}

pub async fn change_password(api: Api, change: &PasswordChange<'_>) -> Result<Outcome, ApiError> {
    api.submit(Endpoint::Setting, Some(change)).await
}
