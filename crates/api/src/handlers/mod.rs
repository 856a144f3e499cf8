#![forbid(unsafe_code)]

mod branches;
mod franchises;
mod products;

pub(crate) use branches::*;
pub(crate) use franchises::*;
pub(crate) use products::*;

use crate::{ApiResponse, BodyCheck};
use fc_storage::StoreError;
use serde::Serialize;
use serde_json::Value;

pub(crate) struct Ctx<'a> {
    pub(crate) id: Option<Value>,
    pub(crate) body: Option<&'a Value>,
}

fn ok<T: Serialize>(id: Option<Value>, result: Result<T, StoreError>) -> ApiResponse {
    match result {
        Ok(payload) => ApiResponse::ok(id, &payload),
        Err(err) => ApiResponse::from_store_error(id, err),
    }
}

fn created<T: Serialize>(id: Option<Value>, result: Result<T, StoreError>) -> ApiResponse {
    match result {
        Ok(payload) => ApiResponse::created(id, &payload),
        Err(err) => ApiResponse::from_store_error(id, err),
    }
}

fn no_content(id: Option<Value>, result: Result<(), StoreError>) -> ApiResponse {
    match result {
        Ok(()) => ApiResponse::no_content(id),
        Err(err) => ApiResponse::from_store_error(id, err),
    }
}

fn name_body(ctx: &Ctx<'_>) -> Result<String, ApiResponse> {
    let mut check = BodyCheck::default();
    match check.name(ctx.body) {
        Some(name) => Ok(name),
        None => Err(check.into_response(ctx.id.clone())),
    }
}

fn product_body(ctx: &Ctx<'_>) -> Result<(String, i64), ApiResponse> {
    let mut check = BodyCheck::default();
    let name = check.name(ctx.body);
    let stock = check.stock(ctx.body);
    match (name, stock) {
        (Some(name), Some(stock)) => Ok((name, stock)),
        _ => Err(check.into_response(ctx.id.clone())),
    }
}
