// src/utils/filter.rs

//! Helpers that append optional WHERE clauses to a `QueryBuilder`.
//! Every builder passed in must already end with a `WHERE` condition
//! (usually `WHERE 1 = 1`) so the helpers can start with `AND`.

use sqlx::{QueryBuilder, Sqlite};

/// Trimmed value, or `None` when missing or blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// `AND column = ?` when `value` is present.
pub fn push_equals(qb: &mut QueryBuilder<'_, Sqlite>, column: &str, value: Option<&str>) {
    if let Some(value) = non_blank(value) {
        qb.push(" AND ")
            .push(column)
            .push(" = ")
            .push_bind(value.to_owned());
    }
}

/// `AND (col1 contains term OR col2 contains term ...)`, case-insensitive.
///
/// Uses `instr` rather than `LIKE` so `%` and `_` in the term are literal.
/// SQLite's `lower()` only folds ASCII letters, so non-ASCII text matches
/// case-sensitively here (unlike the in-memory roadmap matcher).
pub fn push_search(qb: &mut QueryBuilder<'_, Sqlite>, columns: &[&str], term: Option<&str>) {
    push_search_with_lists(qb, columns, &[], term);
}

/// Like [`push_search`], plus `list_columns` holding JSON string arrays.
/// Each array element is matched on its own, so JSON punctuation never matches.
pub fn push_search_with_lists(
    qb: &mut QueryBuilder<'_, Sqlite>,
    columns: &[&str],
    list_columns: &[&str],
    term: Option<&str>,
) {
    let Some(term) = non_blank(term) else {
        return;
    };
    if columns.is_empty() && list_columns.is_empty() {
        return;
    }

    qb.push(" AND (");
    let mut first = true;
    for column in columns {
        if !first {
            qb.push(" OR ");
        }
        first = false;
        qb.push("instr(lower(")
            .push(*column)
            .push("), lower(")
            .push_bind(term.to_owned())
            .push(")) > 0");
    }
    for column in list_columns {
        if !first {
            qb.push(" OR ");
        }
        first = false;
        qb.push("EXISTS (SELECT 1 FROM json_each(")
            .push(*column)
            .push(") WHERE instr(lower(json_each.value), lower(")
            .push_bind(term.to_owned())
            .push(")) > 0)");
    }
    qb.push(")");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_add_nothing() {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT * FROM blogs WHERE 1 = 1");
        push_equals(&mut qb, "category", Some("   "));
        push_search(&mut qb, &["title"], None);
        assert_eq!(qb.sql(), "SELECT * FROM blogs WHERE 1 = 1");
    }

    #[test]
    fn search_spans_columns() {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT * FROM blogs WHERE 1 = 1");
        push_equals(&mut qb, "category", Some("study-tips"));
        push_search(&mut qb, &["title", "excerpt"], Some("exam"));
        assert_eq!(
            qb.sql(),
            "SELECT * FROM blogs WHERE 1 = 1 AND category = ? \
             AND (instr(lower(title), lower(?)) > 0 OR instr(lower(excerpt), lower(?)) > 0)"
        );
    }

    #[test]
    fn list_columns_search_array_elements() {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT * FROM colleges WHERE 1 = 1");
        push_search_with_lists(&mut qb, &["name"], &["specializations"], Some("data"));
        assert_eq!(
            qb.sql(),
            "SELECT * FROM colleges WHERE 1 = 1 AND (instr(lower(name), lower(?)) > 0 \
             OR EXISTS (SELECT 1 FROM json_each(specializations) \
             WHERE instr(lower(json_each.value), lower(?)) > 0))"
        );
    }
}
