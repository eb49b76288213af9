use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::department::Department;
use crate::domain::filter::{FilterError, FilterSpec};
use crate::domain::page::{PAGE_SIZE, Page};
use crate::domain::product::Product;
use crate::repository::{CatalogSource, DurableStorage};
use crate::services::{ServiceError, ServiceResult};
use crate::services::wishlist::WishlistStore;

/// Filter `products` with `filter` and return the requested page.
///
/// The page number is clamped into `1..=total_pages`; an empty result still
/// reports one (empty) page. Pure: identical inputs give identical output.
pub fn query_products(products: &[Product], filter: &FilterSpec, page: usize) -> Page<Product> {
    query_products_with_page_size(products, filter, page, PAGE_SIZE)
}

/// Same as [`query_products`] with an explicit page size.
pub fn query_products_with_page_size(
    products: &[Product],
    filter: &FilterSpec,
    page: usize,
    per_page: usize,
) -> Page<Product> {
    let filtered: Vec<&Product> = products
        .iter()
        .filter(|product| filter.matches(product))
        .collect();

    Page::slice(&filtered, page, per_page).map(Product::clone)
}

/// Filter selection and page number held by a browsing page.
///
/// Any change to the filter sends the user back to page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    filter: FilterSpec,
    page: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new(FilterSpec::default())
    }
}

impl BrowseState {
    pub fn new(filter: FilterSpec) -> Self {
        Self { filter, page: 1 }
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Requested page; the served page may be lower after clamping.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn toggle_color(&mut self, color: &str) {
        toggle(&mut self.filter.colors, color);
        self.page = 1;
    }

    pub fn toggle_type(&mut self, product_type: &str) {
        toggle(&mut self.filter.types, product_type);
        self.page = 1;
    }

    pub fn toggle_seller(&mut self, seller: &str) {
        toggle(&mut self.filter.sellers, seller);
        self.page = 1;
    }

    /// Move the price slider, which only controls the upper bound.
    pub fn set_max_price(&mut self, max: f64) -> Result<(), FilterError> {
        self.filter.price_range = self.filter.price_range.with_max(max)?;
        self.page = 1;
        Ok(())
    }

    pub fn set_min_rating(&mut self, rating: u8) {
        self.filter.rating = rating;
        self.page = 1;
    }

    /// Run the pipeline over `products` for the current selection.
    pub fn current_page(&self, products: &[Product]) -> Page<Product> {
        query_products(products, &self.filter, self.page())
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

/// Product card data: the product and whether its heart is filled.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub wishlisted: bool,
}

/// Data required to render a department page.
#[derive(Debug, Serialize)]
pub struct DepartmentPageData {
    pub title: &'static str,
    pub path: &'static str,
    pub filter: FilterSpec,
    pub products: Page<ProductView>,
    /// Header badge count.
    pub wishlist_count: usize,
}

/// Loads the current page of a department for the given browse state.
pub fn load_department_page<C, S>(
    catalog: &C,
    wishlist: &WishlistStore<S>,
    department: Department,
    state: &BrowseState,
) -> ServiceResult<DepartmentPageData>
where
    C: CatalogSource + ?Sized,
    S: DurableStorage,
{
    let products = catalog.load_products()?;
    let page = state.current_page(&products).map(|product| ProductView {
        wishlisted: wishlist.contains(product.id),
        product,
    });

    Ok(DepartmentPageData {
        title: department.title(),
        path: department.path(),
        filter: state.filter().clone(),
        products: page,
        wishlist_count: wishlist.len(),
    })
}

/// Looks up a single catalog product by id.
pub fn find_product<C>(catalog: &C, product_id: i32) -> ServiceResult<Product>
where
    C: CatalogSource + ?Sized,
{
    catalog
        .load_products()?
        .into_iter()
        .find(|product| product.id == product_id)
        .ok_or(ServiceError::ProductNotFound(product_id))
}
