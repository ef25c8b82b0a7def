//! Top-level pages. The site has a single page.

pub mod home;
