//! Table definitions: the static shape of every entity the API exposes.

use std::fmt;

/// PostgreSQL type a column is cast to when a value is bound for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Text,
}

impl SqlType {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SqlType::Integer => "integer",
            SqlType::Text => "text",
        }
    }
}

/// An operation a path segment may allow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Read,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Read => "read",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: SqlType,
}

impl ColumnDef {
    pub const fn int(name: &'static str) -> Self {
        ColumnDef {
            name,
            sql_type: SqlType::Integer,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        ColumnDef {
            name,
            sql_type: SqlType::Text,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TableDef {
    pub table_name: &'static str,
    pub path_segment: &'static str,
    /// Singular noun used in confirmation messages ("Institute was deleted!").
    pub label: &'static str,
    pub pk_column: &'static str,
    /// True when the store assigns the key (serial); false when the caller supplies it.
    pub pk_generated: bool,
    /// All columns including the key.
    pub columns: &'static [ColumnDef],
    pub operations: &'static [Operation],
    /// ORDER BY column for list; None keeps the store's natural order.
    pub order_by: Option<&'static str>,
}

impl TableDef {
    pub fn allows(&self, op: Operation) -> bool {
        self.operations.contains(&op)
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn pk(&self) -> Option<&ColumnDef> {
        self.column(self.pk_column)
    }

    /// Columns bound on INSERT: everything except a generated key.
    pub fn insert_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns
            .iter()
            .filter(move |c| !(self.pk_generated && c.name == self.pk_column))
    }

    /// Columns set on UPDATE: everything except the key.
    pub fn update_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(move |c| c.name != self.pk_column)
    }
}
