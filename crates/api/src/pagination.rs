//! Forgiving pagination for listing endpoints
//!
//! The `page` query parameter is taken as raw text and never rejected:
//! anything that does not parse as a positive integer falls back to the
//! first page, and anything past the end clamps to the last page.

use serde::Deserialize;

/// Query parameters accepted by paginated listings
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
	pub page: Option<String>,
}

/// One page of items plus where it sits in the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
	pub items: Vec<T>,
	pub current_page: usize,
	pub total_pages: usize,
}

/// Number of pages needed for `total` items. An empty listing still has one
/// (empty) page.
pub fn total_pages(total: usize, page_size: usize) -> usize {
	total.div_ceil(page_size).max(1)
}

/// Slice `items` down to the requested page.
///
/// `requested_page` is the raw query value: `None`, non-numeric text and
/// zero all resolve to page 1, and values past the end resolve to the last
/// page. A number too large for `usize` is past the end, not malformed.
/// `current_page` is always in `1..=total_pages`.
pub fn paginate<T>(items: Vec<T>, requested_page: Option<&str>, page_size: usize) -> Page<T> {
	let total_pages = total_pages(items.len(), page_size);

	let current_page = match requested_page.map(str::trim) {
		None | Some("") => 1,
		Some(raw) => match raw.parse::<usize>() {
			Ok(0) => 1,
			Ok(page) => page.min(total_pages),
			Err(_) if raw.bytes().all(|b| b.is_ascii_digit()) => total_pages,
			Err(_) => 1,
		},
	};

	let items = items
		.into_iter()
		.skip((current_page - 1) * page_size)
		.take(page_size)
		.collect();

	Page {
		items,
		current_page,
		total_pages,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn items(n: usize) -> Vec<usize> {
		(1..=n).collect()
	}

	#[test]
	fn test_total_pages_rounds_up() {
		assert_eq!(total_pages(45, 20), 3);
		assert_eq!(total_pages(40, 20), 2);
		assert_eq!(total_pages(41, 20), 3);
		assert_eq!(total_pages(1, 20), 1);
	}

	#[test]
	fn test_empty_listing_has_one_page() {
		let page = paginate(Vec::<usize>::new(), None, 20);
		assert!(page.items.is_empty());
		assert_eq!(page.current_page, 1);
		assert_eq!(page.total_pages, 1);
	}

	#[test]
	fn test_missing_page_is_first_page() {
		let page = paginate(items(45), None, 20);
		assert_eq!(page.current_page, 1);
		assert_eq!(page.total_pages, 3);
		assert_eq!(page.items, items(20));
	}

	#[test]
	fn test_valid_page_in_range() {
		let page = paginate(items(45), Some("2"), 20);
		assert_eq!(page.current_page, 2);
		assert_eq!(page.items, (21..=40).collect::<Vec<_>>());
	}

	#[test]
	fn test_last_page_holds_the_remainder() {
		let page = paginate(items(45), Some("3"), 20);
		assert_eq!(page.current_page, 3);
		assert_eq!(page.items, (41..=45).collect::<Vec<_>>());
	}

	#[test]
	fn test_overflow_clamps_to_last_page() {
		let page = paginate(items(45), Some("5"), 20);
		assert_eq!(page.current_page, 3);
		assert_eq!(page.total_pages, 3);
		assert_eq!(page.items, (41..=45).collect::<Vec<_>>());
	}

	#[test]
	fn test_garbage_falls_back_to_first_page() {
		for raw in ["abc", "", "1.5", "-2", "0", "  ", "2x"] {
			let page = paginate(items(45), Some(raw), 20);
			assert_eq!(page.current_page, 1, "page param {:?}", raw);
			assert_eq!(page.items, items(20), "page param {:?}", raw);
		}
	}

	#[test]
	fn test_numeric_overflow_clamps_to_last_page() {
		// Too big for usize, but still a page number past the end
		let page = paginate(items(45), Some("99999999999999999999999999"), 20);
		assert_eq!(page.current_page, 3);
		assert_eq!(page.items, (41..=45).collect::<Vec<_>>());
	}

	#[test]
	fn test_paginate_is_idempotent_on_clamped_page() {
		// Requesting the page that an overflowing request clamped to gives
		// back the same slice.
		let clamped = paginate(items(45), Some("99"), 20);
		let direct = paginate(items(45), Some(&clamped.current_page.to_string()), 20);
		assert_eq!(clamped, direct);
	}

	#[test]
	fn test_exact_multiple_has_no_phantom_page() {
		let page = paginate(items(40), Some("3"), 20);
		assert_eq!(page.total_pages, 2);
		assert_eq!(page.current_page, 2);
	}
}
