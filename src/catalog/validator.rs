//! Catalog validation: key and order columns exist and path segments are unique.

use crate::catalog::TableDef;
use crate::error::ConfigError;
use std::collections::HashSet;

pub fn validate(tables: &[TableDef]) -> Result<(), ConfigError> {
    let mut path_segments = HashSet::new();
    let mut table_names = HashSet::new();

    for t in tables {
        if t.columns.is_empty() {
            return Err(ConfigError::Validation(format!("table {} has no columns", t.table_name)));
        }
        if t.pk().is_none() {
            return Err(ConfigError::InvalidPrimaryKey {
                table: t.table_name.to_string(),
                column: t.pk_column.to_string(),
            });
        }

        let column_names: HashSet<&str> = t.columns.iter().map(|c| c.name).collect();
        if column_names.len() != t.columns.len() {
            return Err(ConfigError::Validation(format!(
                "table {} has duplicate columns",
                t.table_name
            )));
        }
        if let Some(order) = t.order_by {
            if !column_names.contains(order) {
                return Err(ConfigError::MissingReference {
                    kind: "order column",
                    id: format!("{}.{}", t.table_name, order),
                });
            }
        }

        if !table_names.insert(t.table_name) {
            return Err(ConfigError::Validation(format!("duplicate table: {}", t.table_name)));
        }
        if !path_segments.insert(t.path_segment) {
            return Err(ConfigError::DuplicatePathSegment(t.path_segment.to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ColumnDef, Operation, INSTITUTES, KEYWORDS};

    #[test]
    fn duplicate_path_segment_is_rejected() {
        let mut other = KEYWORDS;
        other.table_name = "tags";
        let err = validate(&[KEYWORDS, other]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePathSegment(ref p) if p == "keywords"));
    }

    #[test]
    fn missing_key_column_is_rejected() {
        let mut broken = INSTITUTES;
        broken.pk_column = "id";
        let err = validate(&[broken]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPrimaryKey { .. }));
    }

    const WIDGET_COLUMNS: &[ColumnDef] = &[ColumnDef::int("widgetid")];

    #[test]
    fn unknown_order_column_is_rejected() {
        let broken = TableDef {
            table_name: "widgets",
            path_segment: "widgets",
            label: "Widget",
            pk_column: "widgetid",
            pk_generated: true,
            columns: WIDGET_COLUMNS,
            operations: &[Operation::Read],
            order_by: Some("name"),
        };
        let err = validate(&[broken]).unwrap_err();
        assert_eq!(err.to_string(), "missing reference: order column id 'widgets.name'");
    }
}
