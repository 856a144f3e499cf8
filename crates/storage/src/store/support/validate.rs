#![forbid(unsafe_code)]

use super::super::StoreError;
use fc_core::model::{EntityName, Stock};

pub(in crate::store) fn parse_name(value: &str) -> Result<EntityName, StoreError> {
    EntityName::try_new(value).map_err(|err| StoreError::validation("name", err))
}

pub(in crate::store) fn parse_stock(value: i64) -> Result<Stock, StoreError> {
    Stock::try_new(value).map_err(|err| StoreError::validation("stock", err))
}
