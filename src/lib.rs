//! Core library surface for the CatWorld terminal page.
//!
//! `state` is the reusable part: carousel rotation, random fact selection,
//! the like meter and the volume level, owned by a [`CatSession`]. The `ui`
//! module is one presentation of that state.
pub mod catalog;
pub mod config;
pub mod models;
pub mod state;
pub mod ui;

pub use catalog::{Catalog, CatalogError, Catalogs};

/// The domain records the catalogs hold.
pub use models::{Breed, Sound};

pub use state::{CatSession, PlaybackRequest};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
