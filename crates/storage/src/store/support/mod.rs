#![forbid(unsafe_code)]

mod columns;
mod schema;
mod time;

pub(super) use columns::{master_type_column, vendor_column};
pub(super) use schema::{install_schema, is_constraint_violation, table_names};
pub(super) use time::now_ms;
