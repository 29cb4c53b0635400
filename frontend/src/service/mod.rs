pub mod brand;
pub mod credentials;
