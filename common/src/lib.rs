//! Target-independent core of the brand admin panel.
//!
//! Everything here compiles and is tested on the native target; the Yew
//! frontend only wires these pieces to the DOM and to `gloo-net`.

pub mod config;
pub mod controller;
pub mod editor;
pub mod endpoints;
pub mod error;
pub mod model;
pub mod requests;
pub mod routes;
pub mod service;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;
