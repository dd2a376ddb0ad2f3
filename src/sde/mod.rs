//! # Static Data Export (SDE) access
//!
//! Read-only queries over the SQLite static data export. Only two tables are
//! used:
//!
//! - `invTypes(typeID, typeName, marketGroupID)` for items
//! - `mapSolarSystems(solarSystemID, solarSystemName, x, y, z, security)` for systems
//!
//! All name searches use SQLite `LIKE`, which is case-insensitive for ASCII.
//! Callers build patterns with [`like_exact`], [`like_prefix`] and
//! [`like_substring`] so user-typed wildcards are escaped.

use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdeError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A row that must exist (e.g. a system id returned by the route service) is absent.
    #[error("missing {table} row for id {id}")]
    Missing { table: &'static str, id: i64 },
}

pub type SdeResult<T> = std::result::Result<T, SdeError>;

/// An entry from a named SDE table.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: i64,
    pub name: String,
}

/// Which items a search may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFilter {
    Any,
    /// Only items with a market group (tradeable on the market).
    Market,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemPosition {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SystemPosition {
    /// Straight-line distance in metres.
    pub fn distance_to(&self, other: &SystemPosition) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemSecurity {
    pub name: String,
    pub security: f64,
}

/// Escape `LIKE` metacharacters; patterns are used with `ESCAPE '\'`.
fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

pub fn like_exact(query: &str) -> String {
    escape_like(&query.to_lowercase())
}

pub fn like_prefix(query: &str) -> String {
    format!("{}%", escape_like(&query.to_lowercase()))
}

pub fn like_substring(query: &str) -> String {
    format!("%{}%", escape_like(&query.to_lowercase()))
}

/// Handle to the static data export.
pub struct StaticData {
    conn: Connection,
}

impl StaticData {
    /// Open the SDE file read-only.
    pub fn open<P: AsRef<Path>>(path: P) -> SdeResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Wrap an existing connection (used for fixtures built in memory).
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Items whose lowercase name matches `pattern`, ordered by name.
    pub fn search_types(&self, pattern: &str, filter: ItemFilter) -> SdeResult<Vec<Record>> {
        let sql = match filter {
            ItemFilter::Any => {
                r#"SELECT "typeID", "typeName" FROM "invTypes"
                   WHERE LOWER("typeName") LIKE ?1 ESCAPE '\'
                   ORDER BY "typeName""#
            }
            ItemFilter::Market => {
                r#"SELECT "typeID", "typeName" FROM "invTypes"
                   WHERE LOWER("typeName") LIKE ?1 ESCAPE '\' AND "marketGroupID" IS NOT NULL
                   ORDER BY "typeName""#
            }
        };
        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt
            .query_map(params![pattern], |row| {
                Ok(Record {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Look up one solar system by case-insensitive exact name.
    pub fn system_by_name(&self, name: &str) -> SdeResult<Option<Record>> {
        let mut stmt = self.conn.prepare_cached(
            r#"SELECT "solarSystemID", "solarSystemName" FROM "mapSolarSystems"
               WHERE LOWER("solarSystemName") LIKE ?1 ESCAPE '\'
               LIMIT 1"#,
        )?;
        let mut rows = stmt.query_map(params![like_exact(name)], |row| {
            Ok(Record {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        Ok(rows.next().transpose()?)
    }

    /// Systems whose name starts with either of two prefixes, at most `limit` rows.
    pub fn systems_by_prefixes(
        &self,
        first: &str,
        second: &str,
        limit: usize,
    ) -> SdeResult<Vec<SystemPosition>> {
        let mut stmt = self.conn.prepare_cached(
            r#"SELECT "solarSystemName", x, y, z FROM "mapSolarSystems"
               WHERE LOWER("solarSystemName") LIKE ?1 ESCAPE '\'
                  OR LOWER("solarSystemName") LIKE ?2 ESCAPE '\'
               ORDER BY "solarSystemName"
               LIMIT ?3"#,
        )?;
        let rows = stmt
            .query_map(
                params![like_prefix(first), like_prefix(second), limit as i64],
                |row| {
                    Ok(SystemPosition {
                        name: row.get(0)?,
                        x: row.get(1)?,
                        y: row.get(2)?,
                        z: row.get(3)?,
                    })
                },
            )?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Name and coordinates of a system.
    pub fn system_position(&self, system_id: i64) -> SdeResult<SystemPosition> {
        let mut stmt = self.conn.prepare_cached(
            r#"SELECT "solarSystemName", x, y, z FROM "mapSolarSystems"
               WHERE "solarSystemID" = ?1"#,
        )?;
        let mut rows = stmt.query_map(params![system_id], |row| {
            Ok(SystemPosition {
                name: row.get(0)?,
                x: row.get(1)?,
                y: row.get(2)?,
                z: row.get(3)?,
            })
        })?;
        rows.next().transpose()?.ok_or(SdeError::Missing {
            table: "mapSolarSystems",
            id: system_id,
        })
    }

    /// Name and security status of a system.
    pub fn system_security(&self, system_id: i64) -> SdeResult<SystemSecurity> {
        let mut stmt = self.conn.prepare_cached(
            r#"SELECT "solarSystemName", "security" FROM "mapSolarSystems"
               WHERE "solarSystemID" = ?1"#,
        )?;
        let mut rows = stmt.query_map(params![system_id], |row| {
            Ok(SystemSecurity {
                name: row.get(0)?,
                security: row.get(1)?,
            })
        })?;
        rows.next().transpose()?.ok_or(SdeError::Missing {
            table: "mapSolarSystems",
            id: system_id,
        })
    }

    /// Row counts for `status` output: (types, market types, systems).
    pub fn summary(&self) -> SdeResult<(i64, i64, i64)> {
        let types: i64 = self
            .conn
            .query_row(r#"SELECT COUNT(*) FROM "invTypes""#, [], |row| row.get(0))?;
        let market: i64 = self.conn.query_row(
            r#"SELECT COUNT(*) FROM "invTypes" WHERE "marketGroupID" IS NOT NULL"#,
            [],
            |row| row.get(0),
        )?;
        let systems: i64 = self.conn.query_row(
            r#"SELECT COUNT(*) FROM "mapSolarSystems""#,
            [],
            |row| row.get(0),
        )?;
        Ok((types, market, systems))
    }
}
