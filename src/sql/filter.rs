//! Thesis search: optional filters accumulated as typed predicates, rendered into one
//! parameterized SELECT. Placeholder positions are assigned while rendering, so they
//! always match the bind values whatever subset of filters is present.

use crate::catalog::{TableDef, THESES};
use crate::sql::builder::{cast_placeholder, quoted};
use crate::sql::{PgBindValue, QueryBuf};
use serde::Deserialize;

/// One AND-ed condition carrying its own bind value.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    /// Case-insensitive substring match.
    Contains { column: &'static str, needle: String },
    /// Exact match; the value is cast to the column type by the store.
    Equals { column: &'static str, value: String },
}

impl Predicate {
    fn render(&self, table: &TableDef, q: &mut QueryBuf) -> String {
        match self {
            Predicate::Contains { column, needle } => {
                let n = q.push_param(PgBindValue::text(format!("%{}%", needle)));
                format!("{} ILIKE ${}", quoted(column), n)
            }
            Predicate::Equals { column, value } => {
                let n = q.push_param(PgBindValue::text(value.clone()));
                let ph = table
                    .column(column)
                    .map(|c| cast_placeholder(n, c))
                    .unwrap_or_else(|| format!("${}", n));
                format!("{} = {}", quoted(column), ph)
            }
        }
    }
}

/// Accumulates predicates against one table and renders them into a statement.
#[derive(Clone, Debug)]
pub struct FilterQuery<'a> {
    table: &'a TableDef,
    predicates: Vec<Predicate>,
}

impl<'a> FilterQuery<'a> {
    pub fn new(table: &'a TableDef) -> Self {
        FilterQuery {
            table,
            predicates: Vec::new(),
        }
    }

    pub fn and(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Add a predicate only when `value` is present and non-empty.
    pub fn and_if_present(self, value: Option<&str>, make: impl FnOnce(String) -> Predicate) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => self.and(make(v.to_string())),
            None => self,
        }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn render(&self) -> QueryBuf {
        let mut q = QueryBuf::new();
        let where_parts: Vec<String> = self
            .predicates
            .iter()
            .map(|p| p.render(self.table, &mut q))
            .collect();
        let where_clause = if where_parts.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", where_parts.join(" AND "))
        };
        q.sql = format!("SELECT * FROM {}{}", quoted(self.table.table_name), where_clause);
        q
    }
}

/// Query-string filters for `GET /api/search`. Empty strings count as absent.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThesisFilter {
    pub title: Option<String>,
    pub author_id: Option<String>,
    pub type_id: Option<String>,
    pub institute_id: Option<String>,
    pub year: Option<String>,
}

impl ThesisFilter {
    pub fn to_query(&self) -> FilterQuery<'static> {
        let equals = |column: &'static str| move |value: String| Predicate::Equals { column, value };
        FilterQuery::new(&THESES)
            // Title only; abstract text is not searched.
            .and_if_present(self.title.as_deref(), |needle| Predicate::Contains {
                column: "title",
                needle,
            })
            .and_if_present(self.author_id.as_deref(), equals("authorid"))
            .and_if_present(self.type_id.as_deref(), equals("typeid"))
            .and_if_present(self.institute_id.as_deref(), equals("instituteid"))
            .and_if_present(self.year.as_deref(), equals("year"))
    }
}
