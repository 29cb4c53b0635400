pub mod brand;
pub mod modal;
pub mod table;
