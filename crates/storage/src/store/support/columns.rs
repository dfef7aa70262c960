#![forbid(unsafe_code)]

use ic_core::catalog::Vendor;
use ic_core::model::MasterType;
use rusqlite::Row;
use rusqlite::types::Type;

#[derive(Debug, thiserror::Error)]
#[error("unexpected {column} value {value:?}")]
struct UnknownValue {
    column: &'static str,
    value: String,
}

fn conversion_failure(idx: usize, column: &'static str, value: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(UnknownValue { column, value }))
}

pub(in crate::store) fn vendor_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Vendor> {
    let value: String = row.get(idx)?;
    Vendor::parse(&value).ok_or_else(|| conversion_failure(idx, "vendor", value))
}

pub(in crate::store) fn master_type_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<MasterType> {
    let value: String = row.get(idx)?;
    MasterType::parse(&value).ok_or_else(|| conversion_failure(idx, "master_type", value))
}
