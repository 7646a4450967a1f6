//! Transaction list filter
//!
//! A filter narrows a collection fetch. Fields that are unset (or blank,
//! for the search text) are omitted from the query entirely, so an "empty"
//! filter and a filter with blank fields build the same query string. The
//! two are still distinguishable through `is_active` for badge display.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::transaction::TransactionKind;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransactionFilter {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub kind: Option<TransactionKind>,
    pub account_id: Option<i64>,
    pub search: Option<String>,
}

impl TransactionFilter {
    /// True when any constraint would actually narrow the fetch
    pub fn is_active(&self) -> bool {
        self.date_from.is_some()
            || self.date_to.is_some()
            || self.kind.is_some()
            || self.account_id.is_some()
            || self
                .search
                .as_deref()
                .is_some_and(|s| !s.trim().is_empty())
    }

    /// Query parameters for the collection endpoint, unset fields omitted
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(d) = self.date_from {
            pairs.push(("date_from".to_string(), d.format("%Y-%m-%d").to_string()));
        }
        if let Some(d) = self.date_to {
            pairs.push(("date_to".to_string(), d.format("%Y-%m-%d").to_string()));
        }
        if let Some(kind) = self.kind {
            pairs.push(("type".to_string(), kind.as_str().to_string()));
        }
        if let Some(id) = self.account_id {
            pairs.push(("account_id".to_string(), id.to_string()));
        }
        if let Some(s) = self.search.as_deref() {
            let s = s.trim();
            if !s.is_empty() {
                pairs.push(("search".to_string(), s.to_string()));
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_builds_no_query_and_is_inactive() {
        let f = TransactionFilter::default();
        assert!(f.to_query_pairs().is_empty());
        assert!(!f.is_active());
    }

    #[test]
    fn blank_search_is_omitted_but_none_and_blank_stay_distinct() {
        let blank = TransactionFilter {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(blank.to_query_pairs().is_empty());
        assert!(!blank.is_active());
        // Same query as a truly empty filter, different value.
        assert_ne!(blank, TransactionFilter::default());
    }

    #[test]
    fn set_fields_appear_in_order() {
        let f = TransactionFilter {
            date_from: NaiveDate::from_ymd_opt(2026, 1, 1),
            date_to: NaiveDate::from_ymd_opt(2026, 1, 31),
            kind: Some(TransactionKind::Expense),
            account_id: Some(4),
            search: Some("rent".to_string()),
        };
        assert!(f.is_active());
        let pairs = f.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("date_from".to_string(), "2026-01-01".to_string()),
                ("date_to".to_string(), "2026-01-31".to_string()),
                ("type".to_string(), "expense".to_string()),
                ("account_id".to_string(), "4".to_string()),
                ("search".to_string(), "rent".to_string()),
            ]
        );
    }

    #[test]
    fn search_is_trimmed() {
        let f = TransactionFilter {
            search: Some("  coffee ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            f.to_query_pairs(),
            vec![("search".to_string(), "coffee".to_string())]
        );
    }
}
