use std::io::Cursor;
use std::path::Path;

use csv::Trim;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::domain::department::Department;
use crate::domain::product::{MAX_RATING, NewProduct, Product};
use crate::repository::{CatalogError, CatalogResult, CatalogSource};

/// Randomly generated department catalog. The same seed always yields the
/// same products.
#[derive(Debug, Clone)]
pub struct SyntheticCatalog {
    department: Department,
    count: i32,
    seed: u64,
}

impl SyntheticCatalog {
    /// Men's department catalog.
    pub fn new(count: i32, seed: u64) -> Self {
        Self::for_department(Department::Men, count, seed)
    }

    pub fn for_department(department: Department, count: i32, seed: u64) -> Self {
        Self {
            department,
            count,
            seed,
        }
    }
}

impl CatalogSource for SyntheticCatalog {
    fn load_products(&self) -> CatalogResult<Vec<Product>> {
        let profile = self.department.profile();
        let mut rng = StdRng::seed_from_u64(self.seed);

        let products = (1..=self.count)
            .map(|index| {
                let id = profile.id_base + index;
                let price = rng.gen_range(profile.price.clone());
                let rating = rng.gen_range(profile.rating.clone());
                let reviews = rng.gen_range(profile.reviews.clone());
                let image = match self.department {
                    Department::Men => format!("https://picsum.photos/seed/{index}/400/300"),
                    Department::Women => format!(
                        "https://images.unsplash.com/photo-{}?auto=format&fit=crop&w=687&q=80",
                        rng.gen_range(0..1_000_000)
                    ),
                };
                let color = profile.colors[rng.gen_range(0..profile.colors.len())];
                let product_type =
                    profile.product_types[rng.gen_range(0..profile.product_types.len())];
                let seller = profile.sellers[rng.gen_range(0..profile.sellers.len())];

                NewProduct::new(id, format!("Product {index}"), f64::from(price))
                    .with_description(profile.description)
                    .with_rating(rating, reviews)
                    .with_image(image)
                    .with_categories(color, product_type, seller)
                    .build()
            })
            .collect();

        Ok(products)
    }
}

/// Catalog imported from CSV with the header
/// `id,name,description,price,rating,reviews,image,color,type,seller`.
#[derive(Debug, Clone)]
pub struct CsvCatalog {
    bytes: Vec<u8>,
}

impl CsvCatalog {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        Ok(Self::new(std::fs::read(path)?))
    }
}

#[derive(Deserialize)]
struct CatalogCsvRow {
    id: i32,
    name: String,
    #[serde(default)]
    description: String,
    price: f64,
    #[serde(default)]
    rating: u8,
    #[serde(default)]
    reviews: u32,
    #[serde(default)]
    image: String,
    #[serde(default)]
    color: String,
    #[serde(rename = "type", default)]
    product_type: String,
    #[serde(default)]
    seller: String,
}

impl CatalogSource for CsvCatalog {
    fn load_products(&self) -> CatalogResult<Vec<Product>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(Cursor::new(&self.bytes));

        let mut products = Vec::new();
        for (index, record) in reader.deserialize::<CatalogCsvRow>().enumerate() {
            let row = index + 1;
            let record = record?;

            if !record.price.is_finite() || record.price < 0.0 {
                return Err(CatalogError::InvalidRow {
                    row,
                    reason: format!("price `{}` must be a non-negative number", record.price),
                });
            }
            if record.rating > MAX_RATING {
                return Err(CatalogError::InvalidRow {
                    row,
                    reason: format!("rating {} exceeds {MAX_RATING}", record.rating),
                });
            }

            products.push(
                NewProduct::new(record.id, record.name, record.price)
                    .with_description(record.description)
                    .with_rating(record.rating, record.reviews)
                    .with_image(record.image)
                    .with_categories(record.color, record.product_type, record.seller)
                    .build(),
            );
        }

        Ok(products)
    }
}
