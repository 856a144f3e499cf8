#![forbid(unsafe_code)]

use super::super::super::{ProductInfo, StoreError, TopStockEntry};
use fc_core::ids::{BranchId, FranchiseId, ProductId};
use fc_core::model::{EntityName, Stock};
use rusqlite::{OptionalExtension, Row, Transaction, params};

#[derive(Clone, Debug)]
pub(in crate::store) struct ProductRow {
    pub(in crate::store) id: ProductId,
    pub(in crate::store) branch_id: BranchId,
    pub(in crate::store) name: String,
    pub(in crate::store) stock: i64,
}

impl ProductRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: ProductId::new(row.get(0)?),
            branch_id: BranchId::new(row.get(1)?),
            name: row.get(2)?,
            stock: row.get(3)?,
        })
    }

    pub(in crate::store) fn into_info(self) -> ProductInfo {
        ProductInfo {
            id: self.id,
            name: self.name,
            stock: self.stock,
        }
    }
}

pub(in crate::store) fn product_insert_tx(
    tx: &Transaction<'_>,
    branch_id: BranchId,
    name: &EntityName,
    stock: Stock,
) -> Result<ProductId, StoreError> {
    tx.execute(
        "INSERT INTO products(name, stock, deleted, branch_id) VALUES (?1, ?2, 0, ?3)",
        params![name.as_str(), stock.get(), branch_id.get()],
    )?;
    Ok(ProductId::new(tx.last_insert_rowid()))
}

pub(in crate::store) fn product_get_tx(
    tx: &Transaction<'_>,
    id: ProductId,
) -> Result<Option<ProductRow>, StoreError> {
    Ok(tx
        .query_row(
            "SELECT id, branch_id, name, stock FROM products WHERE id=?1 AND deleted=0",
            params![id.get()],
            ProductRow::from_row,
        )
        .optional()?)
}

pub(in crate::store) fn products_by_branch_tx(
    tx: &Transaction<'_>,
    branch_id: BranchId,
) -> Result<Vec<ProductRow>, StoreError> {
    let mut stmt = tx.prepare(
        r#"
        SELECT id, branch_id, name, stock
        FROM products
        WHERE branch_id=?1 AND deleted=0
        ORDER BY id ASC
        "#,
    )?;
    let rows = stmt.query_map(params![branch_id.get()], ProductRow::from_row)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

/// Products of every live branch under the franchise, in (branch, product) id order.
pub(in crate::store) fn products_by_franchise_tx(
    tx: &Transaction<'_>,
    franchise_id: FranchiseId,
) -> Result<Vec<ProductRow>, StoreError> {
    let mut stmt = tx.prepare(
        r#"
        SELECT p.id, p.branch_id, p.name, p.stock
        FROM products p
        JOIN branches b ON b.id = p.branch_id
        WHERE b.franchise_id=?1 AND b.deleted=0 AND p.deleted=0
        ORDER BY p.branch_id ASC, p.id ASC
        "#,
    )?;
    let rows = stmt.query_map(params![franchise_id.get()], ProductRow::from_row)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub(in crate::store) fn product_update_tx(
    tx: &Transaction<'_>,
    id: ProductId,
    name: &EntityName,
    stock: Stock,
) -> Result<usize, StoreError> {
    Ok(tx.execute(
        "UPDATE products SET name=?2, stock=?3 WHERE id=?1 AND deleted=0",
        params![id.get(), name.as_str(), stock.get()],
    )?)
}

pub(in crate::store) fn product_soft_delete_tx(
    tx: &Transaction<'_>,
    id: ProductId,
) -> Result<usize, StoreError> {
    Ok(tx.execute(
        "UPDATE products SET deleted=1 WHERE id=?1 AND deleted=0",
        params![id.get()],
    )?)
}

pub(in crate::store) fn products_soft_delete_by_branch_tx(
    tx: &Transaction<'_>,
    branch_id: BranchId,
) -> Result<usize, StoreError> {
    Ok(tx.execute(
        "UPDATE products SET deleted=1 WHERE branch_id=?1 AND deleted=0",
        params![branch_id.get()],
    )?)
}

pub(in crate::store) fn products_soft_delete_by_franchise_tx(
    tx: &Transaction<'_>,
    franchise_id: FranchiseId,
) -> Result<usize, StoreError> {
    Ok(tx.execute(
        r#"
        UPDATE products SET deleted=1
        WHERE deleted=0
          AND branch_id IN (SELECT id FROM branches WHERE franchise_id=?1)
        "#,
        params![franchise_id.get()],
    )?)
}

/// Every live product whose stock equals the maximum of its live branch.
///
/// Tied products are all returned; branches without live products produce no row.
pub(in crate::store) fn top_stock_by_franchise_tx(
    tx: &Transaction<'_>,
    franchise_id: FranchiseId,
) -> Result<Vec<TopStockEntry>, StoreError> {
    let mut stmt = tx.prepare(
        r#"
        SELECT b.id, b.name, p.id, p.name, p.stock
        FROM products p
        JOIN branches b ON b.id = p.branch_id
        WHERE b.franchise_id=?1
          AND b.deleted=0
          AND p.deleted=0
          AND p.stock = (
            SELECT MAX(p2.stock)
            FROM products p2
            WHERE p2.branch_id = b.id AND p2.deleted=0
          )
        ORDER BY b.id ASC, p.id ASC
        "#,
    )?;
    let rows = stmt.query_map(params![franchise_id.get()], |row| {
        Ok(TopStockEntry {
            branch_id: BranchId::new(row.get(0)?),
            branch_name: row.get(1)?,
            product_id: ProductId::new(row.get(2)?),
            product_name: row.get(3)?,
            stock: row.get(4)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}
