use super::super::*;
use fc_core::ids::BranchId;
use fc_core::model::Entity;

impl SqliteStore {
    pub fn branch_update(&mut self, id: BranchId, name: &str) -> Result<BranchSummary, StoreError> {
        let name = parse_name(name)?;

        let tx = self.conn.transaction()?;
        if branch_rename_tx(&tx, id, &name)? == 0 {
            return Err(StoreError::not_found(Entity::Branch, id));
        }
        tx.commit()?;

        tracing::info!(branch_id = %id, "branch renamed");
        Ok(BranchSummary {
            id,
            name: name.into_string(),
        })
    }
}
