#![forbid(unsafe_code)]

mod agents;
mod core;
mod indexes;
mod masters;

pub(super) fn full_schema_sql() -> String {
    let mut sql = String::new();
    sql.push_str(core::SQL);
    sql.push_str(agents::SQL);
    sql.push_str(masters::SQL);
    sql.push_str(indexes::SQL);
    sql
}
