pub mod department;
pub mod filter;
pub mod page;
pub mod product;
