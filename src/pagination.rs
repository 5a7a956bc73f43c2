//! Pagination helper: page/limit requests to skip/limit pairs.
//!
//! Pure conversion, no I/O. Callers feed the output straight into the
//! repository's list operation.

use serde::Deserialize;

/// Raw pagination request, typically deserialized from query-string
/// parameters. Both fields are optional and may be negative.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Normalized skip/limit pair for a bounded listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u64,
    /// 0 means "no cap": the list operation returns everything past `skip`
    pub limit: u64,
}

/// Convert a page/limit request into a skip/limit pair.
///
/// Both inputs are normalized through their absolute value first; this is a
/// defensive coercion, not validation. An absent or zero page defaults to 1,
/// an absent or zero limit defaults to 0 (uncapped). `skip` is
/// `(page - 1) * limit`, so a zero limit always yields a zero skip.
pub fn compute_pagination(query: &PageQuery) -> Pagination {
    let page = query
        .page
        .map(i64::unsigned_abs)
        .filter(|&p| p != 0)
        .unwrap_or(1);
    let limit = query
        .limit
        .map(i64::unsigned_abs)
        .filter(|&l| l != 0)
        .unwrap_or(0);

    Pagination {
        skip: (page - 1).saturating_mul(limit),
        limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paginate(page: Option<i64>, limit: Option<i64>) -> Pagination {
        compute_pagination(&PageQuery { page, limit })
    }

    #[test]
    fn empty_query_defaults_to_uncapped_first_page() {
        assert_eq!(paginate(None, None), Pagination { skip: 0, limit: 0 });
    }

    #[test]
    fn zero_values_behave_like_absent_ones() {
        assert_eq!(paginate(Some(0), Some(0)), Pagination { skip: 0, limit: 0 });
    }

    #[test]
    fn negative_values_are_coerced_to_positive() {
        assert_eq!(
            paginate(Some(-3), Some(10)),
            Pagination { skip: 20, limit: 10 }
        );
        assert_eq!(
            paginate(Some(2), Some(-5)),
            Pagination { skip: 5, limit: 5 }
        );
    }

    #[test]
    fn second_page_skips_one_full_page() {
        assert_eq!(
            paginate(Some(2), Some(10)),
            Pagination { skip: 10, limit: 10 }
        );
    }

    #[test]
    fn zero_limit_yields_zero_skip_regardless_of_page() {
        assert_eq!(paginate(Some(7), None), Pagination { skip: 0, limit: 0 });
        assert_eq!(
            paginate(Some(7), Some(0)),
            Pagination { skip: 0, limit: 0 }
        );
    }

    proptest! {
        #[test]
        fn skip_is_always_pages_skipped_times_limit(
            page in proptest::option::of(any::<i64>()),
            limit in proptest::option::of(any::<i64>()),
        ) {
            let result = paginate(page, limit);

            let norm_page = page.map(i64::unsigned_abs).filter(|&p| p != 0).unwrap_or(1);
            let norm_limit = limit.map(i64::unsigned_abs).filter(|&l| l != 0).unwrap_or(0);

            prop_assert_eq!(result.limit, norm_limit);
            prop_assert_eq!(result.skip, (norm_page - 1).saturating_mul(norm_limit));
        }
    }
}
