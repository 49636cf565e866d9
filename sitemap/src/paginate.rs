//! Splits a bucket into size-bounded sitemap pages.

use crate::error::{Result, SitemapError};

/// Splits `entries` into consecutive pages of at most `page_size` items.
///
/// Pages preserve input order. An empty input yields exactly one empty page so
/// every bucket has an addressable sitemap file.
///
/// # Errors
///
/// Returns [`SitemapError::InvalidConfiguration`] if `page_size` is zero.
pub fn paginate<T>(entries: &[T], page_size: usize) -> Result<Vec<&[T]>> {
    if page_size == 0 {
        return Err(SitemapError::InvalidConfiguration(
            "page size must be greater than zero".to_string(),
        ));
    }
    if entries.is_empty() {
        return Ok(vec![entries]);
    }
    Ok(entries.chunks(page_size).collect())
}

/// Number of pages [`paginate`] produces for `len` entries: `max(1, ceil(len / page_size))`.
///
/// # Errors
///
/// Returns [`SitemapError::InvalidConfiguration`] if `page_size` is zero.
pub fn expected_page_count(len: usize, page_size: usize) -> Result<usize> {
    if page_size == 0 {
        return Err(SitemapError::InvalidConfiguration(
            "page size must be greater than zero".to_string(),
        ));
    }
    Ok(len.div_ceil(page_size).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_bounded_pages_in_order() {
        let items = [1, 2, 3, 4, 5];
        let pages = paginate(&items, 2).unwrap();
        assert_eq!(pages, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        let items = [1, 2, 3, 4];
        assert_eq!(paginate(&items, 2).unwrap().len(), 2);
    }

    #[test]
    fn empty_input_yields_one_empty_page() {
        let items: [u8; 0] = [];
        let pages = paginate(&items, 1000).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(matches!(
            paginate(&[1], 0),
            Err(SitemapError::InvalidConfiguration(_))
        ));
        assert!(expected_page_count(3, 0).is_err());
    }

    #[test]
    fn page_count_and_concatenation_hold_for_many_sizes() {
        let items: Vec<usize> = (0..37).collect();
        for len in [0, 1, 2, 9, 10, 11, 37] {
            for size in 1..=12 {
                let slice = &items[..len];
                let pages = paginate(slice, size).unwrap();
                assert_eq!(pages.len(), expected_page_count(len, size).unwrap());
                assert!(pages.iter().all(|p| p.len() <= size));
                assert_eq!(pages.concat(), slice.to_vec());
            }
        }
    }
}
