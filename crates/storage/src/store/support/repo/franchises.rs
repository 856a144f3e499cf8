#![forbid(unsafe_code)]

use super::super::super::{FranchiseSummary, StoreError};
use fc_core::ids::FranchiseId;
use fc_core::model::EntityName;
use rusqlite::{OptionalExtension, Transaction, params};

pub(in crate::store) fn franchise_insert_tx(
    tx: &Transaction<'_>,
    name: &EntityName,
) -> Result<FranchiseId, StoreError> {
    tx.execute(
        "INSERT INTO franchises(name, deleted) VALUES (?1, 0)",
        params![name.as_str()],
    )?;
    Ok(FranchiseId::new(tx.last_insert_rowid()))
}

pub(in crate::store) fn franchise_get_tx(
    tx: &Transaction<'_>,
    id: FranchiseId,
) -> Result<Option<FranchiseSummary>, StoreError> {
    Ok(tx
        .query_row(
            "SELECT id, name FROM franchises WHERE id=?1 AND deleted=0",
            params![id.get()],
            |row| {
                Ok(FranchiseSummary {
                    id: FranchiseId::new(row.get(0)?),
                    name: row.get(1)?,
                })
            },
        )
        .optional()?)
}

pub(in crate::store) fn franchise_exists_tx(
    tx: &Transaction<'_>,
    id: FranchiseId,
) -> Result<bool, StoreError> {
    Ok(tx
        .query_row(
            "SELECT 1 FROM franchises WHERE id=?1 AND deleted=0",
            params![id.get()],
            |_| Ok(()),
        )
        .optional()?
        .is_some())
}

pub(in crate::store) fn franchise_list_tx(
    tx: &Transaction<'_>,
) -> Result<Vec<FranchiseSummary>, StoreError> {
    let mut stmt = tx.prepare("SELECT id, name FROM franchises WHERE deleted=0 ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(FranchiseSummary {
            id: FranchiseId::new(row.get(0)?),
            name: row.get(1)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub(in crate::store) fn franchise_rename_tx(
    tx: &Transaction<'_>,
    id: FranchiseId,
    name: &EntityName,
) -> Result<usize, StoreError> {
    Ok(tx.execute(
        "UPDATE franchises SET name=?2 WHERE id=?1 AND deleted=0",
        params![id.get(), name.as_str()],
    )?)
}

pub(in crate::store) fn franchise_soft_delete_tx(
    tx: &Transaction<'_>,
    id: FranchiseId,
) -> Result<usize, StoreError> {
    Ok(tx.execute(
        "UPDATE franchises SET deleted=1 WHERE id=?1 AND deleted=0",
        params![id.get()],
    )?)
}
