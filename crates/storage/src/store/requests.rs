#![forbid(unsafe_code)]

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProductCreateRequest {
    pub name: String,
    pub stock: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProductUpdateRequest {
    pub name: String,
    pub stock: i64,
}
