//! Pagination metadata as reported by the server

use serde::{Deserialize, Serialize};

/// Server-reported cursor for a paged collection.
///
/// `total` is the server-side count of all matching records, not the number
/// accumulated client-side. Pages are 1-indexed and `current_page` never
/// exceeds `last_page` in a well-formed response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageCursor {
    pub current_page: u32,
    pub last_page: u32,
    pub total: u64,
    pub per_page: u32,
}

impl PageCursor {
    pub fn has_more(&self) -> bool {
        self.current_page < self.last_page
    }

    /// The page a continuation fetch should ask for
    pub fn next_page(&self) -> Option<u32> {
        self.has_more().then(|| self.current_page + 1)
    }
}

/// One fetched page of a collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub cursor: PageCursor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_more_and_next_page() {
        let mid = PageCursor { current_page: 2, last_page: 3, total: 5, per_page: 2 };
        assert!(mid.has_more());
        assert_eq!(mid.next_page(), Some(3));

        let last = PageCursor { current_page: 3, last_page: 3, total: 5, per_page: 2 };
        assert!(!last.has_more());
        assert_eq!(last.next_page(), None);
    }

    #[test]
    fn test_deserializes_server_shape() {
        let raw = r#"{"current_page": 1, "last_page": 4, "total": 40, "per_page": 10}"#;
        let c: PageCursor = serde_json::from_str(raw).unwrap();
        assert_eq!(c.current_page, 1);
        assert_eq!(c.per_page, 10);
    }
}
