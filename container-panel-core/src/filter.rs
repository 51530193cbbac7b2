//! Container table live filter.
//!
//! Matches a free-text query against four cell values of each row (user,
//! name, status, port) by lowercase substring. The caller captures its row
//! list when the table is first shown and re-runs the filter on every
//! query edit; filtering only decides visibility, it never creates,
//! removes or reorders rows.

use crate::types::Container;

/// The four cell values of one table row, as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowText {
    pub user: String,
    pub name: String,
    pub status: String,
    pub port: String,
}

impl RowText {
    /// Cell snapshot of a container row.
    pub fn from_container(container: &Container) -> Self {
        Self {
            user: container.user.clone(),
            name: container.name.clone(),
            status: container.status.as_str().to_string(),
            port: container.port.to_string(),
        }
    }
}

/// True iff the row stays visible under `query`.
///
/// The query is trimmed and lowercased; an empty query matches every row.
pub fn row_matches(query: &str, row: &RowText) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }

    row.user.to_lowercase().contains(&q)
        || row.name.to_lowercase().contains(&q)
        || row.status.to_lowercase().contains(&q)
        || row.port.to_lowercase().contains(&q)
}

/// Indexes of the rows visible under `query`, in row order.
pub fn filter_rows(query: &str, rows: &[RowText]) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row_matches(query, row))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<RowText> {
        vec![
            RowText {
                user: "alice".to_string(),
                name: "web1".to_string(),
                status: "running".to_string(),
                port: "8080".to_string(),
            },
            RowText {
                user: "bob".to_string(),
                name: "db1".to_string(),
                status: "stopped".to_string(),
                port: "5432".to_string(),
            },
        ]
    }

    #[test]
    fn empty_query_shows_all_rows() {
        assert_eq!(filter_rows("", &sample_rows()), vec![0, 1]);
    }

    #[test]
    fn status_query_matches_one_row() {
        assert_eq!(filter_rows("running", &sample_rows()), vec![0]);
    }

    #[test]
    fn port_query_matches_one_row() {
        assert_eq!(filter_rows("8080", &sample_rows()), vec![0]);
    }

    #[test]
    fn no_match_hides_all_rows() {
        assert!(filter_rows("zzz", &sample_rows()).is_empty());
    }

    #[test]
    fn query_is_case_insensitive() {
        assert_eq!(filter_rows("ALICE", &sample_rows()), vec![0]);
        assert_eq!(filter_rows("Db1", &sample_rows()), vec![1]);
    }

    #[test]
    fn query_is_trimmed() {
        assert_eq!(filter_rows("  bob  ", &sample_rows()), vec![1]);
        // Whitespace-only behaves like the empty query
        assert_eq!(filter_rows("   ", &sample_rows()), vec![0, 1]);
    }

    #[test]
    fn substring_matches_inside_cells() {
        // "b" appears in "bob", "db1" and "web1"
        assert_eq!(filter_rows("b", &sample_rows()), vec![0, 1]);
    }
}
