use joblens_core::page::{page_slice, page_window, total_pages};

#[test]
fn totals_are_ceiling_division() {
    assert_eq!(total_pages(65, 30), 3);
    assert_eq!(total_pages(60, 30), 2);
    assert_eq!(total_pages(1, 30), 1);
    assert_eq!(total_pages(0, 30), 0);
}

#[test]
fn concatenated_pages_recover_the_result_set() {
    let items: Vec<u32> = (0..65).collect();
    let pages = total_pages(items.len(), 30);
    assert_eq!(pages, 3);

    let mut recovered = Vec::new();
    let mut sizes = Vec::new();
    for page in 0..pages {
        let slice = page_slice(&items, page, 30);
        sizes.push(slice.len());
        recovered.extend_from_slice(slice);
    }
    assert_eq!(sizes, vec![30, 30, 5]);
    assert_eq!(recovered, items);
}

#[test]
fn out_of_range_page_is_empty_not_a_panic() {
    let items: Vec<u32> = (0..10).collect();
    assert!(page_slice(&items, 5, 30).is_empty());
    assert!(page_slice(&items, usize::MAX, 30).is_empty());
}

#[test]
fn window_always_contains_current_page() {
    for total in 1..25usize {
        for current in 0..total {
            let window = page_window(current, total, 10);
            assert_eq!(window.len(), 10.min(total), "total={total}");
            assert!(
                window.contains(&current),
                "current={current} total={total} window={window:?}"
            );
            // contiguous ascending range inside [0, total)
            for pair in window.windows(2) {
                assert_eq!(pair[1], pair[0] + 1);
            }
            assert!(*window.last().unwrap() < total);
        }
    }
}

#[test]
fn small_collections_show_all_pages() {
    assert_eq!(page_window(2, 4, 10), vec![0, 1, 2, 3]);
}
