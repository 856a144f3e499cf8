use super::super::*;
use fc_core::ids::FranchiseId;
use fc_core::model::Entity;

impl SqliteStore {
    pub fn franchise_update(
        &mut self,
        id: FranchiseId,
        name: &str,
    ) -> Result<FranchiseSummary, StoreError> {
        let name = parse_name(name)?;

        let tx = self.conn.transaction()?;
        if franchise_rename_tx(&tx, id, &name)? == 0 {
            return Err(StoreError::not_found(Entity::Franchise, id));
        }
        tx.commit()?;

        tracing::info!(franchise_id = %id, "franchise renamed");
        Ok(FranchiseSummary {
            id,
            name: name.into_string(),
        })
    }
}
