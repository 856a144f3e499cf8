use super::super::*;

impl SqliteStore {
    pub fn franchise_create(&mut self, name: &str) -> Result<FranchiseSummary, StoreError> {
        let name = parse_name(name)?;

        let tx = self.conn.transaction()?;
        let id = franchise_insert_tx(&tx, &name)?;
        tx.commit()?;

        tracing::info!(franchise_id = %id, "franchise created");
        Ok(FranchiseSummary {
            id,
            name: name.into_string(),
        })
    }
}
