#![forbid(unsafe_code)]

use fc_core::ids::{BranchId, FranchiseId, ProductId};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FranchiseSummary {
    pub id: FranchiseId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FranchiseDetail {
    pub id: FranchiseId,
    pub name: String,
    pub branches: Vec<BranchDetail>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BranchSummary {
    pub id: BranchId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BranchDetail {
    pub id: BranchId,
    pub name: String,
    pub products: Vec<ProductInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductInfo {
    pub id: ProductId,
    pub name: String,
    pub stock: i64,
}

/// One row of the per-branch maximum-stock report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopStockEntry {
    pub branch_id: BranchId,
    pub branch_name: String,
    pub product_id: ProductId,
    pub product_name: String,
    pub stock: i64,
}
