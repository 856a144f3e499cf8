use super::super::*;
use fc_core::ids::BranchId;
use fc_core::model::Entity;

impl SqliteStore {
    /// Soft-deletes the branch and its products in one transaction.
    ///
    /// Sibling branches of the same franchise are not touched.
    pub fn branch_delete(&mut self, id: BranchId) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        let Some(branch) = branch_get_tx(&tx, id)? else {
            return Err(StoreError::not_found(Entity::Branch, id));
        };

        let products = products_soft_delete_by_branch_tx(&tx, id)?;
        branch_soft_delete_tx(&tx, id)?;
        tx.commit()?;

        tracing::info!(
            branch_id = %id,
            franchise_id = %branch.franchise_id,
            products,
            "branch deleted"
        );
        Ok(())
    }
}
