use super::super::*;
use fc_core::ids::ProductId;
use fc_core::model::Entity;

impl SqliteStore {
    pub fn product_delete(&mut self, id: ProductId) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        if product_soft_delete_tx(&tx, id)? == 0 {
            return Err(StoreError::not_found(Entity::Product, id));
        }
        tx.commit()?;

        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }
}
