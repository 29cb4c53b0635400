pub mod brand;
pub mod page;
pub mod query;
