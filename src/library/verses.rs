//! Lyrics pagination.
//!
//! Song text is split into verses on a blank line (`"\n\n"`), exactly as
//! written: nothing is trimmed and empty verses produced by the split are
//! kept.

use crate::model::Pagination;

/// Separator between verses
pub const VERSE_SEPARATOR: &str = "\n\n";

/// Split lyrics into verses.
///
/// Empty text yields a single empty verse.
pub fn split_verses(text: &str) -> Vec<&str> {
    text.split(VERSE_SEPARATOR).collect()
}

/// Return the verses on `pagination`'s page.
///
/// A page starting at or past the last verse is empty, not an error.
pub fn page_verses(text: &str, pagination: Pagination) -> Vec<String> {
    let verses = split_verses(text);
    let start = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
    if start >= verses.len() {
        return Vec::new();
    }
    let end = start
        .saturating_add(pagination.per_page as usize)
        .min(verses.len());
    verses[start..end].iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_three_verses_two_per_page() {
        let text = "A\n\nB\n\nC";
        assert_eq!(page_verses(text, Pagination::new(1, 2)), vec!["A", "B"]);
        assert_eq!(page_verses(text, Pagination::new(2, 2)), vec!["C"]);
        assert!(page_verses(text, Pagination::new(3, 2)).is_empty());
    }

    #[test]
    fn test_no_trimming() {
        let text = " first line\nsecond line \n\n\n\nlast";
        assert_eq!(
            split_verses(text),
            vec![" first line\nsecond line ", "", "last"]
        );
    }

    #[test]
    fn test_empty_text_is_one_empty_verse() {
        assert_eq!(split_verses(""), vec![""]);
        assert_eq!(page_verses("", Pagination::new(1, 10)), vec![""]);
        assert!(page_verses("", Pagination::new(2, 10)).is_empty());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let page = Pagination {
            page: u32::MAX,
            per_page: u32::MAX,
        };
        assert!(page_verses("A\n\nB", page).is_empty());
    }

    proptest! {
        #[test]
        fn prop_pages_concatenate_to_all_verses(
            verses in prop::collection::vec("[a-z ]{0,8}", 1..20),
            per_page in 1u32..6,
        ) {
            let text = verses.join(VERSE_SEPARATOR);
            let expected = split_verses(&text);

            let mut collected = Vec::new();
            let mut page = 1;
            loop {
                let chunk = page_verses(&text, Pagination { page, per_page });
                if chunk.is_empty() {
                    break;
                }
                prop_assert!(chunk.len() <= per_page as usize);
                collected.extend(chunk);
                page += 1;
            }

            prop_assert_eq!(collected, expected);
        }
    }
}
