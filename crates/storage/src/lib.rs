#![forbid(unsafe_code)]

mod store;

pub use store::{CustomerInsertRequest, CustomerRow, SqliteStore, StoreConfig, StoreError};
