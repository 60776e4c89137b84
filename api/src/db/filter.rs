// Filter construction for asset list, count and stats queries

use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, Condition};

use crate::entity::assets::Column;

/// Columns scanned by the free-text search.
const SEARCH_COLUMNS: [Column; 5] = [
    Column::Name,
    Column::AssetCode,
    Column::AssignedTo,
    Column::Department,
    Column::Location,
];

/// Optional filter parameters accepted by the list and count operations.
#[derive(Debug, Clone, Default)]
pub struct AssetFilter {
    pub search: Option<String>,
    pub asset_type: Option<String>,
    pub status: Option<String>,
}

impl AssetFilter {
    /// Filter matching one exact category.
    pub fn by_type(asset_type: &str) -> Self {
        AssetFilter {
            asset_type: Some(asset_type.to_string()),
            ..Default::default()
        }
    }

    /// Filter matching one exact status.
    pub fn by_status(status: &str) -> Self {
        AssetFilter {
            status: Some(status.to_string()),
            ..Default::default()
        }
    }

    /// Builds the store-level predicate: exact equality on type and status
    /// when present, AND'd with a case-insensitive substring OR-group
    /// across the searchable columns. Blank input degrades to "no
    /// constraint" rather than failing.
    pub fn condition(&self) -> Condition {
        let mut cond = Condition::all();

        if let Some(asset_type) = &self.asset_type {
            cond = cond.add(Column::AssetType.eq(asset_type));
        }

        if let Some(status) = &self.status {
            cond = cond.add(Column::Status.eq(status));
        }

        if let Some(search) = &self.search {
            let needle = search.trim();
            if !needle.is_empty() {
                let pattern = format!("%{}%", escape_like(needle));
                let mut any = Condition::any();
                for column in SEARCH_COLUMNS {
                    any = any.add(Expr::col(column).ilike(pattern.clone()));
                }
                cond = cond.add(any);
            }
        }

        cond
    }
}

/// Escapes LIKE wildcards so user input matches literally.
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::assets::Entity as Assets;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    fn sql(filter: &AssetFilter) -> String {
        Assets::find()
            .filter(filter.condition())
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let query = sql(&AssetFilter::default());
        assert!(!query.contains("WHERE"), "unexpected WHERE in: {query}");
    }

    #[test]
    fn type_and_status_are_exact_matches() {
        let filter = AssetFilter {
            asset_type: Some("PC".to_string()),
            status: Some("Active".to_string()),
            ..Default::default()
        };
        let query = sql(&filter);
        assert!(query.contains(r#""type" = 'PC'"#), "missing type clause: {query}");
        assert!(query.contains(r#""status" = 'Active'"#), "missing status clause: {query}");
    }

    #[test]
    fn search_spans_five_columns_case_insensitively() {
        let filter = AssetFilter {
            search: Some("  ser  ".to_string()),
            ..Default::default()
        };
        let query = sql(&filter);
        assert_eq!(query.matches("ILIKE '%ser%'").count(), 5, "query was: {query}");
        for column in ["name", "asset_code", "assigned_to", "department", "location"] {
            assert!(query.contains(&format!(r#""{column}""#)), "missing {column}: {query}");
        }
    }

    #[test]
    fn search_is_anded_with_filters() {
        let filter = AssetFilter {
            search: Some("hp".to_string()),
            asset_type: Some("Printer".to_string()),
            ..Default::default()
        };
        let query = sql(&filter);
        assert!(query.contains(r#""type" = 'Printer' AND ("#), "query was: {query}");
    }

    #[test]
    fn blank_search_adds_no_constraint() {
        let filter = AssetFilter {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        let query = sql(&filter);
        assert!(!query.contains("ILIKE"), "query was: {query}");
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like(r"c:\tmp"), r"c:\\tmp");
    }
}
