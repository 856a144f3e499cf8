use super::super::*;
use fc_core::ids::BranchId;
use fc_core::model::Entity;

impl SqliteStore {
    pub fn branch_detail(&self, id: BranchId) -> Result<BranchDetail, StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        let Some(branch) = branch_get_tx(&tx, id)? else {
            return Err(StoreError::not_found(Entity::Branch, id));
        };
        let products = products_by_branch_tx(&tx, id)?;
        tx.commit()?;

        tracing::debug!(branch_id = %id, franchise_id = %branch.franchise_id, "branch detail loaded");
        Ok(BranchDetail {
            id: branch.id,
            name: branch.name,
            products: products.into_iter().map(ProductRow::into_info).collect(),
        })
    }
}
