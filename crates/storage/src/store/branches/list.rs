use super::super::*;
use fc_core::ids::FranchiseId;
use fc_core::model::Entity;

impl SqliteStore {
    /// Live branches of a live franchise; an unknown or deleted franchise is `NotFound`.
    pub fn branch_list(&self, franchise_id: FranchiseId) -> Result<Vec<BranchSummary>, StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        if !franchise_exists_tx(&tx, franchise_id)? {
            return Err(StoreError::not_found(Entity::Franchise, franchise_id));
        }
        let branches = branches_by_franchise_tx(&tx, franchise_id)?;
        tx.commit()?;

        Ok(branches.into_iter().map(BranchRow::into_summary).collect())
    }
}
