use super::super::*;
use fc_core::ids::BranchId;
use fc_core::model::Entity;

impl SqliteStore {
    pub fn product_list(&self, branch_id: BranchId) -> Result<Vec<ProductInfo>, StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        if !branch_exists_tx(&tx, branch_id)? {
            return Err(StoreError::not_found(Entity::Branch, branch_id));
        }
        let products = products_by_branch_tx(&tx, branch_id)?;
        tx.commit()?;

        Ok(products.into_iter().map(ProductRow::into_info).collect())
    }
}
