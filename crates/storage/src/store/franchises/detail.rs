use super::super::*;
use fc_core::ids::{BranchId, FranchiseId};
use fc_core::model::Entity;
use std::collections::HashMap;

impl SqliteStore {
    /// Franchise with its live branches, each carrying its live products.
    ///
    /// Two flat queries grouped in memory, both inside one read transaction.
    pub fn franchise_detail(&self, id: FranchiseId) -> Result<FranchiseDetail, StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        let Some(franchise) = franchise_get_tx(&tx, id)? else {
            return Err(StoreError::not_found(Entity::Franchise, id));
        };
        let branches = branches_by_franchise_tx(&tx, id)?;
        let products = products_by_franchise_tx(&tx, id)?;
        tx.commit()?;

        let mut by_branch: HashMap<BranchId, Vec<ProductInfo>> = HashMap::new();
        for product in products {
            by_branch
                .entry(product.branch_id)
                .or_default()
                .push(product.into_info());
        }

        let branches = branches
            .into_iter()
            .map(|branch| BranchDetail {
                products: by_branch.remove(&branch.id).unwrap_or_default(),
                id: branch.id,
                name: branch.name,
            })
            .collect();

        tracing::debug!(franchise_id = %id, "franchise detail loaded");
        Ok(FranchiseDetail {
            id: franchise.id,
            name: franchise.name,
            branches,
        })
    }
}
