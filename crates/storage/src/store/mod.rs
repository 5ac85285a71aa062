#![forbid(unsafe_code)]

mod error;
mod requests;

pub use error::StoreError;
pub use requests::*;

use ck_core::contact::PreferredContact;
use ck_core::record::{Birthday, BirthdayError, CustomerName};
use rusqlite::{Connection, OpenFlags, params};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DB_FILE_NAME: &str = "customers.db";

/// Store configuration. One recognized option: where the backing file lives.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub storage_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.storage_dir.join(DB_FILE_NAME)
    }
}

#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    storage_dir: PathBuf,
}

impl SqliteStore {
    /// Opens the store for read/write use and installs the schema. Safe to
    /// call on every startup: the schema install is `IF NOT EXISTS`.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&config.storage_dir)?;

        let conn = Connection::open(config.db_path())?;
        conn.busy_timeout(Duration::from_secs(5))?;
        install_schema(&conn)?;

        Ok(Self {
            conn,
            storage_dir: config.storage_dir.clone(),
        })
    }

    /// Viewer path: opens an existing database without the ability to
    /// create or modify anything. Fails if the backing file is absent.
    pub fn open_read_only(config: &StoreConfig) -> Result<Self, StoreError> {
        let conn = Connection::open_with_flags(
            config.db_path(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(Duration::from_secs(5))?;

        Ok(Self {
            conn,
            storage_dir: config.storage_dir.clone(),
        })
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Persists one customer and returns the assigned id. The row is written
    /// with a single statement: it exists in full or not at all.
    pub fn insert(&mut self, request: CustomerInsertRequest) -> Result<i64, StoreError> {
        let name = CustomerName::try_new(request.name)
            .map_err(|_| StoreError::InvalidInput("name must not be empty"))?;

        let birthday = match normalize_optional(request.birthday) {
            Some(raw) => Some(Birthday::parse(&raw).map_err(birthday_error)?),
            None => None,
        };
        let preferred_contact = match normalize_optional(request.preferred_contact) {
            Some(raw) => Some(PreferredContact::parse(&raw).map_err(|_| {
                StoreError::InvalidInput(
                    "preferred_contact must be one of email, phone, mail, other",
                )
            })?),
            None => None,
        };
        let email = normalize_optional(request.email);
        let phone_number = normalize_optional(request.phone_number);
        let address = normalize_optional(request.address);

        self.conn.execute(
            r#"
            INSERT INTO customers(name, birthday, email, phone_number, address, preferred_contact)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                name.as_str(),
                birthday.as_ref().map(Birthday::as_str),
                email,
                phone_number,
                address,
                preferred_contact.map(|channel| channel.as_str()),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    /// All rows, ordered by id. An empty table is an empty vec, not an
    /// error.
    pub fn list_all(&self) -> Result<Vec<CustomerRow>, StoreError> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, birthday, email, phone_number, address, preferred_contact
            FROM customers
            ORDER BY id
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(CustomerRow {
                id: row.get(0)?,
                name: row.get(1)?,
                birthday: row.get(2)?,
                email: row.get(3)?,
                phone_number: row.get(4)?,
                address: row.get(5)?,
                preferred_contact: row.get(6)?,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

fn install_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        r#"
        PRAGMA journal_mode=WAL;
        PRAGMA synchronous=NORMAL;

        CREATE TABLE IF NOT EXISTS customers (
          id INTEGER PRIMARY KEY,
          name TEXT NOT NULL,
          birthday TEXT,
          email TEXT,
          phone_number TEXT,
          address TEXT,
          preferred_contact TEXT
            CHECK (preferred_contact IN ('email', 'phone', 'mail', 'other'))
        );
        "#,
    )?;
    Ok(())
}

/// Frontends hand over raw field text; surrounding whitespace is dropped and
/// an empty optional becomes NULL.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn birthday_error(err: BirthdayError) -> StoreError {
    StoreError::InvalidInput(match err {
        BirthdayError::Empty | BirthdayError::InvalidFormat => {
            "birthday must be formatted YYYY-MM-DD"
        }
        BirthdayError::MonthOutOfRange => "birthday month is out of range",
        BirthdayError::DayOutOfRange => "birthday day is out of range",
    })
}
