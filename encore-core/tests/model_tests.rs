//! Integration tests for core result and paging types.

use encore_core::{ErrorKind, FetchedResource, LoadResult, Page, PageKey, PagingConfig};

#[test]
fn test_fetched_resource_from_result() {
    let ok: FetchedResource<u8> = Ok::<u8, ErrorKind>(1).into();
    assert!(ok.is_success());

    let err: FetchedResource<u8> = Err::<u8, ErrorKind>(ErrorKind::RateLimitExceeded).into();
    assert_eq!(err.cause(), Some(&ErrorKind::RateLimitExceeded));
}

#[test]
fn test_page_boundary_exactly_page_size() {
    // A last page that happens to be full still asks for one more page.
    let config = PagingConfig::with_page_size(10);
    let full = Page::new(config.first_key(), (0..10).collect::<Vec<u32>>(), None);
    assert_eq!(full.next_offset, Some(10));

    let empty: Page<u32> = Page::new(config.key_at(10), vec![], None);
    assert!(empty.is_end());
}

#[test]
fn test_load_result_map() {
    let loaded = LoadResult::Page(Page::last(PageKey::new(0, 5), vec![1, 2]));
    let mapped = loaded.map(|n: i32| n * 10);
    match mapped {
        LoadResult::Page(page) => assert_eq!(page.items, vec![10, 20]),
        LoadResult::Error(kind) => panic!("unexpected error {kind}"),
    }

    let failed: LoadResult<i32> = LoadResult::Error(ErrorKind::DeserializationError);
    assert!(failed.map(|n| n + 1).is_error());
}
