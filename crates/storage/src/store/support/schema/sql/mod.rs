#![forbid(unsafe_code)]

mod catalog;
mod guards;
mod indexes;
mod pragmas;

pub(super) fn full_schema_sql() -> String {
    let mut sql = String::new();
    sql.push_str(pragmas::SQL);
    sql.push_str(catalog::SQL);
    sql.push_str(indexes::SQL);
    sql.push_str(guards::SQL);
    sql
}
