use super::super::*;
use fc_core::ids::FranchiseId;
use fc_core::model::Entity;

impl SqliteStore {
    /// Highest-stock product(s) of every live branch under the franchise.
    ///
    /// When several products of a branch share the maximum, each of them is
    /// reported (ordered by branch id, then product id). Branches with no
    /// live products are left out.
    pub fn franchise_top_stock(
        &self,
        franchise_id: FranchiseId,
    ) -> Result<Vec<TopStockEntry>, StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        if !franchise_exists_tx(&tx, franchise_id)? {
            return Err(StoreError::not_found(Entity::Franchise, franchise_id));
        }
        let entries = top_stock_by_franchise_tx(&tx, franchise_id)?;
        tx.commit()?;

        tracing::debug!(franchise_id = %franchise_id, rows = entries.len(), "top stock computed");
        Ok(entries)
    }
}
