//! Offset-window pagination primitives shared by provider read models.
//!
//! Listing endpoints accept a [`PageRequest`] describing a contiguous window
//! over an ordered, already-filtered result sequence and answer with a
//! [`Page`] envelope pairing the windowed results with the pre-window total.
//! The window is always clipped to the available range: requests beyond the
//! end of the sequence are valid and yield an empty result set, never an
//! error.
//!
//! # Examples
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let page = Page::from_vec(vec!["a", "b", "c", "d"], &PageRequest::new(2, Some(2)));
//! assert_eq!(page.results(), ["c", "d"]);
//! assert_eq!(page.total(), 4);
//! ```

use serde::{Deserialize, Serialize};

/// Window specification for a listing request.
///
/// `index` selects the zero-based offset of the first item to return and
/// `count` bounds how many items follow; an absent `count` means "everything
/// from `index` onwards". Both values describe the window only; they never
/// influence the `total` reported by the resulting [`Page`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct PageRequest {
    /// Zero-based offset of the first item in the window.
    #[serde(default)]
    pub index: usize,
    /// Maximum number of items in the window; `None` takes the remainder.
    #[serde(default)]
    pub count: Option<usize>,
}

impl PageRequest {
    /// Construct a window starting at `index` spanning at most `count` items.
    #[must_use]
    pub const fn new(index: usize, count: Option<usize>) -> Self {
        Self { index, count }
    }

    /// The window covering an entire sequence.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            index: 0,
            count: None,
        }
    }
}

/// Errors raised when assembling a [`Page`] envelope by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// The envelope claimed fewer total items than it carries.
    #[error("page carries {results} results but claims a total of {total}")]
    ResultsExceedTotal {
        /// Number of results carried by the envelope.
        results: usize,
        /// Claimed pre-window total.
        total: usize,
    },
}

/// Envelope pairing one window of results with the pre-window total.
///
/// ## Invariants
/// - `results.len() <= total`: the envelope never carries more items than
///   the sequence it was cut from.
///
/// # Examples
///
/// ```
/// use pagination::{Page, PageRequest};
///
/// let page = Page::from_vec(vec![1, 2, 3], &PageRequest::new(5, None));
/// assert!(page.results().is_empty());
/// assert_eq!(page.total(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PageDto<T>", into = "PageDto<T>")]
#[serde(bound(
    serialize = "T: Serialize + Clone",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    results: Vec<T>,
    total: usize,
}

impl<T> Page<T> {
    /// Assemble an envelope from pre-windowed results and a claimed total.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::ResultsExceedTotal`] when `results` carries more
    /// items than `total` claims exist.
    pub fn try_new(results: Vec<T>, total: usize) -> Result<Self, PageError> {
        if results.len() > total {
            return Err(PageError::ResultsExceedTotal {
                results: results.len(),
                total,
            });
        }
        Ok(Self { results, total })
    }

    /// Cut the requested window out of a fully materialised sequence.
    ///
    /// The total is taken from the sequence length before the window is
    /// applied, so out-of-range windows report the full total alongside an
    /// empty result set.
    #[must_use]
    pub fn from_vec(items: Vec<T>, request: &PageRequest) -> Self {
        let total = items.len();
        let count = request.count.unwrap_or(usize::MAX);
        let results = items
            .into_iter()
            .skip(request.index)
            .take(count)
            .collect();
        Self { results, total }
    }

    /// Empty envelope over an empty sequence.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            results: Vec::new(),
            total: 0,
        }
    }

    /// The windowed results in sequence order.
    #[must_use]
    pub fn results(&self) -> &[T] {
        &self.results
    }

    /// Count of items in the full sequence before windowing.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of items carried by this window.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether this window carries no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Consume the envelope, keeping only the windowed results.
    #[must_use]
    pub fn into_results(self) -> Vec<T> {
        self.results
    }

    /// Map the windowed results to another item type, keeping the total.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            results: self.results.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

/// Wire representation enforcing the envelope invariant on deserialisation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageDto<T> {
    results: Vec<T>,
    total: usize,
}

impl<T: Clone> From<Page<T>> for PageDto<T> {
    fn from(value: Page<T>) -> Self {
        Self {
            results: value.results,
            total: value.total,
        }
    }
}

impl<T> TryFrom<PageDto<T>> for Page<T> {
    type Error = PageError;

    fn try_from(value: PageDto<T>) -> Result<Self, Self::Error> {
        Self::try_new(value.results, value.total)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for window clipping and envelope invariants.

    use rstest::rstest;

    use super::*;

    fn letters() -> Vec<char> {
        vec!['a', 'b', 'c', 'd']
    }

    #[rstest]
    #[case::full_window(PageRequest::all(), vec!['a', 'b', 'c', 'd'])]
    #[case::offset_only(PageRequest::new(2, None), vec!['c', 'd'])]
    #[case::offset_and_count(PageRequest::new(2, Some(2)), vec!['c', 'd'])]
    #[case::count_past_end(PageRequest::new(3, Some(10)), vec!['d'])]
    #[case::index_at_total(PageRequest::new(4, None), vec![])]
    #[case::index_past_total(PageRequest::new(9, Some(2)), vec![])]
    #[case::zero_count(PageRequest::new(0, Some(0)), vec![])]
    fn windows_clip_to_available_range(
        #[case] request: PageRequest,
        #[case] expected: Vec<char>,
    ) {
        let page = Page::from_vec(letters(), &request);
        assert_eq!(page.results(), expected);
        assert_eq!(page.total(), 4, "total must ignore the window");
    }

    #[test]
    fn empty_sequence_yields_empty_page() {
        let page = Page::from_vec(Vec::<char>::new(), &PageRequest::new(1, Some(3)));
        assert!(page.is_empty());
        assert_eq!(page.total(), 0);
    }

    #[test]
    fn try_new_rejects_overfull_envelope() {
        let error = Page::try_new(vec![1, 2, 3], 2).expect_err("invariant must hold");
        assert_eq!(
            error,
            PageError::ResultsExceedTotal {
                results: 3,
                total: 2
            }
        );
    }

    #[test]
    fn map_preserves_total() {
        let page = Page::from_vec(letters(), &PageRequest::new(1, Some(2)));
        let mapped = page.map(|c| c.to_ascii_uppercase());
        assert_eq!(mapped.results(), ['B', 'C']);
        assert_eq!(mapped.total(), 4);
    }

    #[test]
    fn request_deserialises_with_defaults() {
        let defaulted: PageRequest = serde_json::from_str("{}").expect("empty object is valid");
        assert_eq!(defaulted, PageRequest::all());

        let explicit: PageRequest =
            serde_json::from_str(r#"{"index": 2, "count": 3}"#).expect("explicit window");
        assert_eq!(explicit, PageRequest::new(2, Some(3)));
    }

    #[test]
    fn page_round_trips_through_json() {
        let page = Page::from_vec(vec![10, 20, 30], &PageRequest::new(1, None));
        let json = serde_json::to_string(&page).expect("serialise page");
        assert_eq!(json, r#"{"results":[20,30],"total":3}"#);

        let parsed: Page<i32> = serde_json::from_str(&json).expect("parse page");
        assert_eq!(parsed, page);
    }

    #[test]
    fn page_deserialisation_rejects_overfull_envelope() {
        let result: Result<Page<i32>, _> =
            serde_json::from_str(r#"{"results":[1,2,3],"total":1}"#);
        assert!(result.is_err());
    }
}
