use f2h_storefront::cli::{Cmd, DepartmentArg, run};
use f2h_storefront::domain::department::WOMEN_SELLERS;
use f2h_storefront::domain::filter::{FilterSpec, PriceRange};
use f2h_storefront::domain::page::PAGE_SIZE;
use f2h_storefront::forms::browse::BrowseQuery;
use f2h_storefront::repository::{CatalogSource, SyntheticCatalog};
use f2h_storefront::services::catalog::{BrowseState, query_products};

mod common;

#[test]
fn red_filter_over_hundred_products_pages_by_twenty() {
    let products = SyntheticCatalog::new(100, 2024)
        .load_products()
        .expect("generate catalog");
    let filter = FilterSpec::new()
        .colors(["Red"])
        .price_range(PriceRange::new(0.0, 1000.0).expect("range"));

    let expected: Vec<i32> = products
        .iter()
        .filter(|product| product.color == "Red")
        .map(|product| product.id)
        .collect();

    let first = query_products(&products, &filter, 1);
    assert_eq!(first.total_items, expected.len());
    assert_eq!(first.total_pages, expected.len().div_ceil(PAGE_SIZE).max(1));

    let mut served = Vec::new();
    for page in 1..=first.total_pages {
        let current = query_products(&products, &filter, page);
        assert!(current.items.len() <= PAGE_SIZE);
        assert!(current.items.iter().all(|product| product.color == "Red"));
        served.extend(current.items.iter().map(|product| product.id));
    }
    assert_eq!(served, expected);
}

#[test]
fn total_pages_follows_ceiling_rule() {
    let products = SyntheticCatalog::new(100, 1)
        .load_products()
        .expect("generate catalog");

    for n in [0usize, 1, 19, 20, 21, 40, 41, 100] {
        let page = query_products(&products[..n], &FilterSpec::new(), 1);
        let expected = if n == 0 { 1 } else { n.div_ceil(20) };
        assert_eq!(page.total_pages, expected, "n = {n}");
    }
}

#[test]
fn query_string_drives_browse_state() {
    let products = SyntheticCatalog::new(100, 9)
        .load_products()
        .expect("generate catalog");
    let (filter, page) = BrowseQuery::parse("types[0]=Jeans&rating=2&page=50")
        .and_then(BrowseQuery::into_filter)
        .expect("valid query");

    let mut state = BrowseState::new(filter);
    state.set_page(page);
    let current = state.current_page(&products);

    assert_eq!(current.page, current.total_pages);
    assert!(
        current
            .items
            .iter()
            .all(|product| product.product_type == "Jeans" && product.rating >= 2)
    );

    state.toggle_color("Blue");
    assert_eq!(state.current_page(&products).page, 1);
}

#[test]
fn women_page_lists_women_sellers() {
    let test_storage = common::TestStorage::new();

    let output = run(
        Cmd::Browse {
            department: DepartmentArg::Women,
            query: String::new(),
        },
        &test_storage.config(),
    )
    .expect("browse");
    let page: serde_json::Value = serde_json::from_str(&output).expect("json output");

    assert_eq!(page["title"], "Women's Fashion");
    let items = page["products"]["items"].as_array().expect("items array");
    assert!(!items.is_empty());
    for item in items {
        let seller = item["seller"].as_str().expect("seller");
        assert!(WOMEN_SELLERS.contains(&seller), "unexpected seller {seller}");
    }
}
