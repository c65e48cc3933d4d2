//! Builds parameterized SELECT, COUNT, INSERT, UPDATE, DELETE for the animals table.

use super::params::SqlParam;
use crate::model::AnimalFilter;

/// Quote identifier for PostgreSQL.
pub fn quote_ident(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Schema-qualified animals table.
#[derive(Clone, Debug)]
pub struct AnimalTable {
    qualified: String,
}

impl AnimalTable {
    pub const NAME: &'static str = "animals";

    pub fn new(schema: &str) -> Self {
        AnimalTable {
            qualified: format!("{}.{}", quote_ident(schema), quote_ident(Self::NAME)),
        }
    }

    pub fn qualified(&self) -> &str {
        &self.qualified
    }
}

const PK: &str = "animal_id";
const COLUMNS: &str = "\"animal_id\", \"species\", \"name\", \"age\"";

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: impl Into<SqlParam>) -> usize {
        self.params.push(v.into());
        self.params.len()
    }

    /// WHERE clause for the filter: species, then name, then age; empty when unconstrained.
    fn where_clause(&mut self, filter: &AnimalFilter) -> String {
        let mut parts = Vec::new();
        if let Some(species) = &filter.species {
            let n = self.push_param(species.as_str());
            parts.push(format!("{} = ${}", quote_ident("species"), n));
        }
        if let Some(name) = &filter.name {
            let n = self.push_param(name.as_str());
            parts.push(format!("{} = ${}", quote_ident("name"), n));
        }
        if let Some(min) = filter.minimum_age {
            let n = self.push_param(min);
            parts.push(format!("{} >= ${}", quote_ident("age"), n));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", parts.join(" AND "))
        }
    }
}

/// SELECT COUNT(*) over the filtered rows.
pub fn select_count(table: &AnimalTable, filter: &AnimalFilter) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_clause = q.where_clause(filter);
    q.sql = format!("SELECT COUNT(*) FROM {}{}", table.qualified(), where_clause);
    q
}

/// SELECT one page of filtered rows, ORDER BY pk so offsets are stable.
pub fn select_page(table: &AnimalTable, filter: &AnimalFilter, offset: i64, limit: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_clause = q.where_clause(filter);
    let limit_n = q.push_param(limit);
    let offset_n = q.push_param(offset);
    q.sql = format!(
        "SELECT {} FROM {}{} ORDER BY {} LIMIT ${} OFFSET ${}",
        COLUMNS,
        table.qualified(),
        where_clause,
        quote_ident(PK),
        limit_n,
        offset_n
    );
    q
}

/// SELECT by primary key. Caller binds the id as $1.
pub fn select_by_id(table: &AnimalTable) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        COLUMNS,
        table.qualified(),
        quote_ident(PK)
    )
}

/// SELECT EXISTS by primary key. Caller binds the id as $1.
pub fn exists_by_id(table: &AnimalTable) -> String {
    format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = $1)",
        table.qualified(),
        quote_ident(PK)
    )
}

/// INSERT without the pk so the sequence assigns it; returns the stored row.
pub fn insert(table: &AnimalTable, species: &str, name: &str, age: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let s = q.push_param(species);
    let n = q.push_param(name);
    let a = q.push_param(age);
    q.sql = format!(
        "INSERT INTO {} ({}, {}, {}) VALUES (${}, ${}, ${}) RETURNING {}",
        table.qualified(),
        quote_ident("species"),
        quote_ident("name"),
        quote_ident("age"),
        s,
        n,
        a,
        COLUMNS
    );
    q
}

/// Full replace of every non-pk column. Zero affected rows means the row is gone.
pub fn replace(table: &AnimalTable, id: i32, species: &str, name: &str, age: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let s = q.push_param(species);
    let n = q.push_param(name);
    let a = q.push_param(age);
    let id_n = q.push_param(id);
    q.sql = format!(
        "UPDATE {} SET {} = ${}, {} = ${}, {} = ${} WHERE {} = ${}",
        table.qualified(),
        quote_ident("species"),
        s,
        quote_ident("name"),
        n,
        quote_ident("age"),
        a,
        quote_ident(PK),
        id_n
    );
    q
}

/// DELETE by id. Caller binds the id as $1.
pub fn delete(table: &AnimalTable) -> String {
    format!("DELETE FROM {} WHERE {} = $1", table.qualified(), quote_ident(PK))
}

/// CREATE TABLE IF NOT EXISTS for the animals table.
pub fn create_table(table: &AnimalTable) -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            animal_id SERIAL PRIMARY KEY,
            species TEXT NOT NULL,
            name TEXT NOT NULL,
            age INTEGER NOT NULL CHECK (age >= 0)
        )
        "#,
        table.qualified()
    )
}
