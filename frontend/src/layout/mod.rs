pub mod admin_layout;
