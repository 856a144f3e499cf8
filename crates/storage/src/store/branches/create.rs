use super::super::*;
use fc_core::ids::FranchiseId;
use fc_core::model::Entity;

impl SqliteStore {
    pub fn branch_create(
        &mut self,
        franchise_id: FranchiseId,
        name: &str,
    ) -> Result<BranchSummary, StoreError> {
        let name = parse_name(name)?;

        let tx = self.conn.transaction()?;
        if !franchise_exists_tx(&tx, franchise_id)? {
            return Err(StoreError::not_found(Entity::Franchise, franchise_id));
        }
        let id = branch_insert_tx(&tx, franchise_id, &name)?;
        tx.commit()?;

        tracing::info!(branch_id = %id, franchise_id = %franchise_id, "branch created");
        Ok(BranchSummary {
            id,
            name: name.into_string(),
        })
    }
}
