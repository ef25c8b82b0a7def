//! Page building blocks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write `RwSignal<SiteState>` from Leptos context. The
//! nav bar and hero are always rendered; the three panels are mutually
//! exclusive and chosen by `pages::home`.

pub mod about_panel;
pub mod contact_panel;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod products_panel;
