#![forbid(unsafe_code)]

use super::super::super::{BranchSummary, StoreError};
use fc_core::ids::{BranchId, FranchiseId};
use fc_core::model::EntityName;
use rusqlite::{OptionalExtension, Row, Transaction, params};

#[derive(Clone, Debug)]
pub(in crate::store) struct BranchRow {
    pub(in crate::store) id: BranchId,
    pub(in crate::store) franchise_id: FranchiseId,
    pub(in crate::store) name: String,
}

impl BranchRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: BranchId::new(row.get(0)?),
            franchise_id: FranchiseId::new(row.get(1)?),
            name: row.get(2)?,
        })
    }

    pub(in crate::store) fn into_summary(self) -> BranchSummary {
        BranchSummary {
            id: self.id,
            name: self.name,
        }
    }
}

pub(in crate::store) fn branch_insert_tx(
    tx: &Transaction<'_>,
    franchise_id: FranchiseId,
    name: &EntityName,
) -> Result<BranchId, StoreError> {
    tx.execute(
        "INSERT INTO branches(name, deleted, franchise_id) VALUES (?1, 0, ?2)",
        params![name.as_str(), franchise_id.get()],
    )?;
    Ok(BranchId::new(tx.last_insert_rowid()))
}

pub(in crate::store) fn branch_get_tx(
    tx: &Transaction<'_>,
    id: BranchId,
) -> Result<Option<BranchRow>, StoreError> {
    Ok(tx
        .query_row(
            "SELECT id, franchise_id, name FROM branches WHERE id=?1 AND deleted=0",
            params![id.get()],
            BranchRow::from_row,
        )
        .optional()?)
}

pub(in crate::store) fn branch_exists_tx(
    tx: &Transaction<'_>,
    id: BranchId,
) -> Result<bool, StoreError> {
    Ok(tx
        .query_row(
            "SELECT 1 FROM branches WHERE id=?1 AND deleted=0",
            params![id.get()],
            |_| Ok(()),
        )
        .optional()?
        .is_some())
}

pub(in crate::store) fn branches_by_franchise_tx(
    tx: &Transaction<'_>,
    franchise_id: FranchiseId,
) -> Result<Vec<BranchRow>, StoreError> {
    let mut stmt = tx.prepare(
        r#"
        SELECT id, franchise_id, name
        FROM branches
        WHERE franchise_id=?1 AND deleted=0
        ORDER BY id ASC
        "#,
    )?;
    let rows = stmt.query_map(params![franchise_id.get()], BranchRow::from_row)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub(in crate::store) fn branch_rename_tx(
    tx: &Transaction<'_>,
    id: BranchId,
    name: &EntityName,
) -> Result<usize, StoreError> {
    Ok(tx.execute(
        "UPDATE branches SET name=?2 WHERE id=?1 AND deleted=0",
        params![id.get(), name.as_str()],
    )?)
}

pub(in crate::store) fn branch_soft_delete_tx(
    tx: &Transaction<'_>,
    id: BranchId,
) -> Result<usize, StoreError> {
    Ok(tx.execute(
        "UPDATE branches SET deleted=1 WHERE id=?1 AND deleted=0",
        params![id.get()],
    )?)
}

pub(in crate::store) fn branches_soft_delete_by_franchise_tx(
    tx: &Transaction<'_>,
    franchise_id: FranchiseId,
) -> Result<usize, StoreError> {
    Ok(tx.execute(
        "UPDATE branches SET deleted=1 WHERE franchise_id=?1 AND deleted=0",
        params![franchise_id.get()],
    )?)
}
