//! Pagination over ordered question lists

/// Default questions per page
pub const DEFAULT_QUESTIONS_PER_PAGE: usize = 10;

/// A requested page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-indexed). Page 0 addresses nothing.
    pub page: usize,
    /// Items per page (at least 1)
    pub per_page: usize,
}

impl PageRequest {
    /// Per page is clamped to a minimum of 1; the page number is kept as given.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page,
            per_page: per_page.max(1),
        }
    }

    /// Index of the first item on this page, or None for page 0.
    pub fn offset(&self) -> Option<usize> {
        self.page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(self.per_page))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_QUESTIONS_PER_PAGE,
        }
    }
}

/// One page of items plus totals for the full, unpaginated set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items for the requested page (empty when out of range)
    pub items: Vec<T>,
    /// Item count of the full set
    pub total: usize,
    /// Items per page
    pub per_page: usize,
}

impl<T> Page<T> {
    /// `ceil(total / per_page)`, from the full set.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice `items[(page-1)*per_page .. page*per_page]`.
///
/// A page past the end yields an empty `items`; `total` always reflects the
/// full input.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len();
    let page_items = match request.offset() {
        Some(start) if start < total => items
            .into_iter()
            .skip(start)
            .take(request.per_page)
            .collect(),
        _ => Vec::new(),
    };

    Page {
        items: page_items,
        total,
        per_page: request.per_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        assert_eq!(PageRequest::new(1, 10).offset(), Some(0));
        assert_eq!(PageRequest::new(2, 10).offset(), Some(10));
        assert_eq!(PageRequest::new(3, 25).offset(), Some(50));
        assert_eq!(PageRequest::new(0, 10).offset(), None);
    }

    #[test]
    fn clamps_per_page() {
        assert_eq!(PageRequest::new(1, 0).per_page, 1);
    }

    #[test]
    fn first_page() {
        let page = paginate((1..=25).collect(), PageRequest::new(1, 10));
        assert_eq!(page.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn partial_last_page() {
        let page = paginate((1..=25).collect(), PageRequest::new(3, 10));
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn page_past_end_is_empty_with_full_totals() {
        let page = paginate((1..=25).collect::<Vec<i32>>(), PageRequest::new(4, 10));
        assert!(page.is_empty());
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn page_zero_is_empty() {
        let page = paginate(vec![1, 2, 3], PageRequest::new(0, 10));
        assert!(page.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn empty_input() {
        let page = paginate(Vec::<i32>::new(), PageRequest::default());
        assert!(page.is_empty());
        assert_eq!(page.total_pages(), 0);
    }
}
