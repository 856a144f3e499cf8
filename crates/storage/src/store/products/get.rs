use super::super::*;
use fc_core::ids::ProductId;
use fc_core::model::Entity;

impl SqliteStore {
    pub fn product_get(&self, id: ProductId) -> Result<ProductInfo, StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        let product = product_get_tx(&tx, id)?;
        tx.commit()?;

        product
            .map(ProductRow::into_info)
            .ok_or_else(|| StoreError::not_found(Entity::Product, id))
    }
}
