//! Category Endpoints

use serde::Serialize;

use super::{Api, Endpoint};
use crate::error::ApiError;
use crate::models::{Category, Outcome};

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct CategoryBody<'a> {
    name: &'a str,
}

// ========================
// Calls
// ========================

pub async fn list_categories(api: Api) -> Result<Vec<Category>, ApiError> {
    api.fetch(Endpoint::CategoryList, None::<&()>).await
}

pub async fn add_category(api: Api, name: &str) -> Result<Outcome, ApiError> {
    api.submit(Endpoint::CategoryAdd, Some(&CategoryBody { name })).await
}

pub async fn edit_category(api: Api, id: i64, name: &str) -> Result<Outcome, ApiError> {
    api.submit(Endpoint::CategoryEdit(id), Some(&CategoryBody { name })).await
}

pub async fn delete_category(api: Api, id: i64) -> Result<(), ApiError> {
    api.send(Endpoint::CategoryDelete(id), None::<&()>).await
}
