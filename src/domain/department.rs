use std::ops::RangeInclusive;

/// Colors sold in the men's department.
pub const MEN_COLORS: [&str; 4] = ["Red", "Blue", "Green", "Black"];
/// Product types sold in the men's department.
pub const MEN_PRODUCT_TYPES: [&str; 4] = ["T-Shirt", "Jeans", "Jacket", "Shoes"];
/// Sellers listed in the men's department.
pub const MEN_SELLERS: [&str; 3] = ["Seller A", "Seller B", "Seller C"];

/// Colors sold in the women's department.
pub const WOMEN_COLORS: [&str; 10] = [
    "Black", "White", "Red", "Blue", "Green", "Yellow", "Purple", "Pink", "Gray", "Brown",
];
/// Product types sold in the women's department.
pub const WOMEN_PRODUCT_TYPES: [&str; 8] = [
    "T-Shirts",
    "Jeans",
    "Dresses",
    "Shoes",
    "Accessories",
    "Outerwear",
    "Activewear",
    "Formal",
];
/// Sellers listed in the women's department.
pub const WOMEN_SELLERS: [&str; 3] = ["Top Rated", "New Arrivals", "Best Deals"];

/// Browsing pages of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    Men,
    Women,
}

/// Palette and value ranges a department's generated products are drawn from.
#[derive(Debug, Clone)]
pub struct DepartmentProfile {
    pub colors: &'static [&'static str],
    pub product_types: &'static [&'static str],
    pub sellers: &'static [&'static str],
    pub price: RangeInclusive<u32>,
    pub rating: RangeInclusive<u8>,
    pub reviews: RangeInclusive<u32>,
    pub description: &'static str,
    /// Added to the running index so product ids never collide across departments.
    pub id_base: i32,
}

impl Department {
    pub fn path(self) -> &'static str {
        match self {
            Department::Men => "/men_fashion",
            Department::Women => "/women_fashion",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Department::Men => "Men's Fashion",
            Department::Women => "Women's Fashion",
        }
    }

    pub fn profile(self) -> DepartmentProfile {
        match self {
            Department::Men => DepartmentProfile {
                colors: &MEN_COLORS,
                product_types: &MEN_PRODUCT_TYPES,
                sellers: &MEN_SELLERS,
                price: 10..=109,
                rating: 1..=5,
                reviews: 0..=99,
                description: "This is a sample product description.",
                id_base: 0,
            },
            Department::Women => DepartmentProfile {
                colors: &WOMEN_COLORS,
                product_types: &WOMEN_PRODUCT_TYPES,
                sellers: &WOMEN_SELLERS,
                price: 20..=119,
                rating: 4..=5,
                reviews: 100..=299,
                description: "Elegant and stylish design",
                id_base: 100_000,
            },
        }
    }
}
