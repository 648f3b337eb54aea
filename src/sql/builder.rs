//! Builds parameterized SELECT, INSERT, UPDATE, DELETE from a table definition.

use crate::catalog::{ColumnDef, TableDef};
use crate::sql::PgBindValue;
use serde_json::Value;
use std::collections::HashMap;

/// Quote identifier for PostgreSQL (safe: only from the catalog).
pub(crate) fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Placeholder with a cast to the column type, e.g. `$3::integer`.
pub(crate) fn cast_placeholder(n: u32, column: &ColumnDef) -> String {
    format!("${}::{}", n, column.sql_type.as_sql())
}

#[derive(Debug, Default)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    pub fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    /// Append a bind value and return its 1-based placeholder position.
    pub fn push_param(&mut self, v: PgBindValue) -> u32 {
        self.params.push(v);
        self.params.len() as u32
    }
}

/// SELECT every row, ordered when the table asks for it.
pub fn select_all(table: &TableDef) -> QueryBuf {
    let mut q = QueryBuf::new();
    let order_clause = table
        .order_by
        .map(|c| format!(" ORDER BY {} ASC", quoted(c)))
        .unwrap_or_default();
    q.sql = format!("SELECT * FROM {}{}", quoted(table.table_name), order_clause);
    q
}

/// INSERT every insertable column; fields missing from the body bind NULL.
pub fn insert(table: &TableDef, body: &HashMap<String, Value>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for c in table.insert_columns() {
        let val = body.get(c.name).map(PgBindValue::from_json).unwrap_or(PgBindValue::Null);
        let n = q.push_param(val);
        cols.push(quoted(c.name));
        placeholders.push(cast_placeholder(n, c));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
        quoted(table.table_name),
        cols.join(", "),
        placeholders.join(", ")
    );
    q
}

/// UPDATE by key, replacing every non-key column; fields missing from the body bind NULL.
pub fn update(table: &TableDef, id: i64, body: &HashMap<String, Value>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for c in table.update_columns() {
        let val = body.get(c.name).map(PgBindValue::from_json).unwrap_or(PgBindValue::Null);
        let n = q.push_param(val);
        sets.push(format!("{} = {}", quoted(c.name), cast_placeholder(n, c)));
    }
    let id_param = q.push_param(PgBindValue::from(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = {}",
        quoted(table.table_name),
        sets.join(", "),
        quoted(table.pk_column),
        key_placeholder(table, id_param)
    );
    q
}

/// DELETE by key.
pub fn delete(table: &TableDef, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::from(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = {}",
        quoted(table.table_name),
        quoted(table.pk_column),
        key_placeholder(table, n)
    );
    q
}

fn key_placeholder(table: &TableDef, n: u32) -> String {
    match table.pk() {
        Some(pk) => cast_placeholder(n, pk),
        None => format!("${}", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{INSTITUTES, LANGUAGES, PEOPLE, THESES};
    use serde_json::json;

    fn body(v: Value) -> HashMap<String, Value> {
        match v {
            Value::Object(m) => m.into_iter().collect(),
            _ => unreachable!(),
        }
    }

    #[test]
    fn theses_list_has_no_ordering() {
        assert_eq!(select_all(&THESES).sql, r#"SELECT * FROM "theses""#);
    }

    #[test]
    fn people_list_orders_by_first_name() {
        assert_eq!(
            select_all(&PEOPLE).sql,
            r#"SELECT * FROM "people" ORDER BY "firstname" ASC"#
        );
    }

    #[test]
    fn thesis_insert_binds_caller_supplied_key() {
        let q = insert(&THESES, &body(json!({ "thesisno": 1001, "title": "Graph Networks", "year": "2024" })));
        assert_eq!(
            q.sql,
            concat!(
                r#"INSERT INTO "theses" ("thesisno", "title", "abstract", "year", "pagenum", "typeid", "#,
                r#""instituteid", "authorid", "supervisorid", "languageid") "#,
                "VALUES ($1::integer, $2::text, $3::text, $4::integer, $5::integer, $6::integer, ",
                "$7::integer, $8::integer, $9::integer, $10::integer) RETURNING *"
            )
        );
        assert_eq!(q.params.len(), 10);
        assert_eq!(q.params[0], PgBindValue::I64(1001));
        assert_eq!(q.params[1], PgBindValue::text("Graph Networks"));
        assert_eq!(q.params[2], PgBindValue::Null);
        assert_eq!(q.params[3], PgBindValue::text("2024"));
    }

    #[test]
    fn lookup_insert_skips_generated_key() {
        let q = insert(&INSTITUTES, &body(json!({ "institutename": "Science", "universityid": 2 })));
        assert_eq!(
            q.sql,
            r#"INSERT INTO "institutes" ("institutename", "universityid") VALUES ($1::text, $2::integer) RETURNING *"#
        );
        assert_eq!(q.params, vec![PgBindValue::text("Science"), PgBindValue::I64(2)]);
    }

    #[test]
    fn update_replaces_all_columns_and_binds_key_last() {
        let q = update(&INSTITUTES, 7, &body(json!({ "institutename": "Engineering" })));
        assert_eq!(
            q.sql,
            r#"UPDATE "institutes" SET "institutename" = $1::text, "universityid" = $2::integer WHERE "instituteid" = $3::integer"#
        );
        assert_eq!(
            q.params,
            vec![PgBindValue::text("Engineering"), PgBindValue::Null, PgBindValue::I64(7)]
        );
    }

    #[test]
    fn update_ignores_key_in_body() {
        let q = update(&LANGUAGES, 3, &body(json!({ "languageid": 99, "languagename": "Turkish" })));
        assert_eq!(q.params, vec![PgBindValue::text("Turkish"), PgBindValue::I64(3)]);
    }

    #[test]
    fn delete_by_key() {
        let q = delete(&THESES, 1001);
        assert_eq!(q.sql, r#"DELETE FROM "theses" WHERE "thesisno" = $1::integer"#);
        assert_eq!(q.params, vec![PgBindValue::I64(1001)]);
    }
}
