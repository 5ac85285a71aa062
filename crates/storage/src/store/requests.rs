#![forbid(unsafe_code)]

/// One row of the `customers` table as persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerRow {
    pub id: i64,
    pub name: String,
    pub birthday: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub preferred_contact: Option<String>,
}

impl CustomerRow {
    pub const COLUMNS: &[&str] = &[
        "id",
        "name",
        "birthday",
        "email",
        "phone_number",
        "address",
        "preferred_contact",
    ];
}

/// Insert payload as collected from a frontend. Fields arrive untrimmed;
/// the store normalizes before writing.
#[derive(Clone, Debug, Default)]
pub struct CustomerInsertRequest {
    pub name: String,
    pub birthday: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub preferred_contact: Option<String>,
}
