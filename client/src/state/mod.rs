//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `site` holds the only mutable state on the page (active section and the
//! contact draft). `catalog` is read-only data rendered by the products panel.

pub mod catalog;
pub mod site;
