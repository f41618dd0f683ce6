use std::ops::Range;

pub const PAGE_SIZE: usize = 30;

/// `ceil(len / page_size)`; zero for an empty working set.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// Page count as shown to the user: an empty set still shows one page.
pub fn display_page_count(len: usize, page_size: usize) -> usize {
    page_count(len, page_size).max(1)
}

pub fn page_bounds(page: usize, len: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

pub fn has_prev(page: usize) -> bool {
    page > 0
}

pub fn has_next(page: usize, len: usize, page_size: usize) -> bool {
    (page + 1).saturating_mul(page_size) < len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, PAGE_SIZE), 0);
        assert_eq!(page_count(1, PAGE_SIZE), 1);
        assert_eq!(page_count(30, PAGE_SIZE), 1);
        assert_eq!(page_count(31, PAGE_SIZE), 2);
        assert_eq!(page_count(90, PAGE_SIZE), 3);
        assert_eq!(display_page_count(0, PAGE_SIZE), 1);
    }

    #[test]
    fn test_pages_cover_working_set_exactly_once() {
        for len in [0usize, 1, 29, 30, 31, 59, 60, 61, 200] {
            let mut covered = Vec::new();
            for page in 0..page_count(len, PAGE_SIZE) {
                covered.extend(page_bounds(page, len, PAGE_SIZE));
            }
            assert_eq!(covered, (0..len).collect::<Vec<_>>(), "len = {}", len);
        }
    }

    #[test]
    fn test_navigation_at_thirty() {
        assert!(!has_prev(0));
        assert!(!has_next(0, 30, PAGE_SIZE));
    }

    #[test]
    fn test_navigation_at_thirty_one() {
        assert!(!has_prev(0));
        assert!(has_next(0, 31, PAGE_SIZE));
        assert!(has_prev(1));
        assert!(!has_next(1, 31, PAGE_SIZE));
        assert_eq!(page_bounds(1, 31, PAGE_SIZE), 30..31);
    }

    #[test]
    fn test_bounds_past_the_end_are_empty() {
        assert!(page_bounds(5, 31, PAGE_SIZE).is_empty());
        assert!(page_bounds(0, 0, PAGE_SIZE).is_empty());
    }
}
