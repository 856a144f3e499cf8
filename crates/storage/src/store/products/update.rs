use super::super::*;
use fc_core::ids::ProductId;
use fc_core::model::Entity;

impl SqliteStore {
    /// Overwrites name and stock; a negative stock is rejected before the
    /// transaction opens, so the stored row is left as it was.
    pub fn product_update(
        &mut self,
        id: ProductId,
        request: ProductUpdateRequest,
    ) -> Result<ProductInfo, StoreError> {
        let name = parse_name(&request.name)?;
        let stock = parse_stock(request.stock)?;

        let tx = self.conn.transaction()?;
        if product_update_tx(&tx, id, &name, stock)? == 0 {
            return Err(StoreError::not_found(Entity::Product, id));
        }
        tx.commit()?;

        tracing::info!(product_id = %id, stock = stock.get(), "product updated");
        Ok(ProductInfo {
            id,
            name: name.into_string(),
            stock: stock.get(),
        })
    }
}
