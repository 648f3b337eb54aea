//! The thesis catalog: one definition per table, looked up by API path segment.

use crate::catalog::types::{ColumnDef, Operation, TableDef};
use crate::catalog::validate;
use crate::error::ConfigError;
use std::collections::HashMap;

const ALL_OPS: &[Operation] = &[
    Operation::Read,
    Operation::Create,
    Operation::Update,
    Operation::Delete,
];

pub const THESES: TableDef = TableDef {
    table_name: "theses",
    path_segment: "theses",
    label: "Thesis",
    pk_column: "thesisno",
    pk_generated: false,
    columns: &[
        ColumnDef::int("thesisno"),
        ColumnDef::text("title"),
        ColumnDef::text("abstract"),
        ColumnDef::int("year"),
        ColumnDef::int("pagenum"),
        ColumnDef::int("typeid"),
        ColumnDef::int("instituteid"),
        ColumnDef::int("authorid"),
        ColumnDef::int("supervisorid"),
        ColumnDef::int("languageid"),
    ],
    // No thesis update exists.
    operations: &[Operation::Read, Operation::Create, Operation::Delete],
    order_by: None,
};

pub const PEOPLE: TableDef = TableDef {
    table_name: "people",
    path_segment: "people",
    label: "Person",
    pk_column: "personid",
    pk_generated: true,
    columns: &[
        ColumnDef::int("personid"),
        ColumnDef::text("firstname"),
        ColumnDef::text("lastname"),
        ColumnDef::text("title"),
        ColumnDef::text("email"),
    ],
    operations: &[Operation::Read, Operation::Create],
    order_by: Some("firstname"),
};

pub const INSTITUTES: TableDef = TableDef {
    table_name: "institutes",
    path_segment: "institutes",
    label: "Institute",
    pk_column: "instituteid",
    pk_generated: true,
    columns: &[
        ColumnDef::int("instituteid"),
        ColumnDef::text("institutename"),
        ColumnDef::int("universityid"),
    ],
    operations: ALL_OPS,
    order_by: Some("instituteid"),
};

/// Lookup tables that are nothing but an id and a name.
macro_rules! lookup_table {
    ($name:ident, $table:expr, $path:expr, $label:expr, $pk:expr, $col:expr) => {
        pub const $name: TableDef = TableDef {
            table_name: $table,
            path_segment: $path,
            label: $label,
            pk_column: $pk,
            pk_generated: true,
            columns: &[ColumnDef::int($pk), ColumnDef::text($col)],
            operations: ALL_OPS,
            order_by: Some($pk),
        };
    };
}

lookup_table!(UNIVERSITIES, "universities", "universities", "University", "universityid", "universityname");
lookup_table!(LANGUAGES, "languages", "languages", "Language", "languageid", "languagename");
lookup_table!(THESIS_TYPES, "thesistypes", "types", "Type", "typeid", "typename");
lookup_table!(SUBJECT_TOPICS, "subjecttopics", "topics", "Topic", "topicid", "topicname");
lookup_table!(KEYWORDS, "keywords", "keywords", "Keyword", "keywordid", "keywordname");

/// Every table the API exposes.
pub const TABLES: &[TableDef] = &[
    THESES,
    PEOPLE,
    INSTITUTES,
    UNIVERSITIES,
    LANGUAGES,
    THESIS_TYPES,
    SUBJECT_TOPICS,
    KEYWORDS,
];

#[derive(Clone, Debug)]
pub struct Catalog {
    pub tables: Vec<&'static TableDef>,
    pub table_by_path: HashMap<&'static str, &'static TableDef>,
}

impl Catalog {
    /// Validate the definitions and index them by path segment.
    pub fn from_tables(tables: &'static [TableDef]) -> Result<Self, ConfigError> {
        validate(tables)?;
        let tables: Vec<&'static TableDef> = tables.iter().collect();
        let table_by_path = tables.iter().map(|t| (t.path_segment, *t)).collect();
        Ok(Catalog {
            tables,
            table_by_path,
        })
    }

    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_tables(TABLES)
    }

    pub fn table_by_path(&self, path: &str) -> Option<&'static TableDef> {
        self.table_by_path.get(path).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SqlType;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.tables.len(), 8);
        for path in ["theses", "people", "institutes", "universities", "languages", "types", "topics", "keywords"] {
            assert!(catalog.table_by_path(path).is_some(), "missing {}", path);
        }
        assert!(catalog.table_by_path("search").is_none());
    }

    #[test]
    fn types_path_maps_to_thesistypes_table() {
        let catalog = Catalog::builtin().unwrap();
        let t = catalog.table_by_path("types").unwrap();
        assert_eq!(t.table_name, "thesistypes");
        assert_eq!(t.pk_column, "typeid");
    }

    #[test]
    fn thesis_key_is_caller_supplied() {
        let cols: Vec<&str> = THESES.insert_columns().map(|c| c.name).collect();
        assert_eq!(cols[0], "thesisno");
        assert_eq!(cols.len(), 10);
        assert!(!THESES.allows(Operation::Update));
        assert_eq!(THESES.pk().map(|c| c.sql_type), Some(SqlType::Integer));
    }

    #[test]
    fn generated_keys_are_not_inserted() {
        let cols: Vec<&str> = INSTITUTES.insert_columns().map(|c| c.name).collect();
        assert_eq!(cols, vec!["institutename", "universityid"]);
        let cols: Vec<&str> = KEYWORDS.update_columns().map(|c| c.name).collect();
        assert_eq!(cols, vec!["keywordname"]);
    }

    #[test]
    fn people_are_read_and_create_only() {
        assert!(PEOPLE.allows(Operation::Read));
        assert!(PEOPLE.allows(Operation::Create));
        assert!(!PEOPLE.allows(Operation::Delete));
        assert_eq!(PEOPLE.order_by, Some("firstname"));
    }
}
