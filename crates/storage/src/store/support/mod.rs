#![forbid(unsafe_code)]

mod repo;
mod schema;
mod validate;

pub(super) use repo::branches::*;
pub(super) use repo::franchises::*;
pub(super) use repo::products::*;
pub(super) use schema::migrate_sqlite_schema;
pub(super) use validate::*;
