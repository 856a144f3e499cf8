use super::super::*;
use fc_core::ids::BranchId;
use fc_core::model::Entity;

impl SqliteStore {
    pub fn product_create(
        &mut self,
        branch_id: BranchId,
        request: ProductCreateRequest,
    ) -> Result<ProductInfo, StoreError> {
        let name = parse_name(&request.name)?;
        let stock = parse_stock(request.stock)?;

        let tx = self.conn.transaction()?;
        if !branch_exists_tx(&tx, branch_id)? {
            return Err(StoreError::not_found(Entity::Branch, branch_id));
        }
        let id = product_insert_tx(&tx, branch_id, &name, stock)?;
        tx.commit()?;

        tracing::info!(
            product_id = %id,
            branch_id = %branch_id,
            stock = stock.get(),
            "product created"
        );
        Ok(ProductInfo {
            id,
            name: name.into_string(),
            stock: stock.get(),
        })
    }
}
