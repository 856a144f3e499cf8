use super::super::*;
use fc_core::ids::FranchiseId;
use fc_core::model::Entity;

impl SqliteStore {
    /// Soft-deletes the franchise together with all of its branches and products.
    ///
    /// Products go first, then branches, then the franchise row, all in one
    /// transaction: a failure at any step leaves the whole tree untouched.
    pub fn franchise_delete(&mut self, id: FranchiseId) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        if !franchise_exists_tx(&tx, id)? {
            return Err(StoreError::not_found(Entity::Franchise, id));
        }

        let products = products_soft_delete_by_franchise_tx(&tx, id)?;
        let branches = branches_soft_delete_by_franchise_tx(&tx, id)?;
        franchise_soft_delete_tx(&tx, id)?;
        tx.commit()?;

        tracing::info!(franchise_id = %id, branches, products, "franchise deleted");
        Ok(())
    }
}
