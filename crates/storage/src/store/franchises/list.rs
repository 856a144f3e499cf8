use super::super::*;

impl SqliteStore {
    /// Live franchises in creation order.
    pub fn franchise_list(&self) -> Result<Vec<FranchiseSummary>, StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        let franchises = franchise_list_tx(&tx)?;
        tx.commit()?;
        Ok(franchises)
    }
}
