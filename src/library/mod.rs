//! The video catalog and the sources it is loaded from.
//!
//! ```text
//! videos.txt / videos.json
//!        │  CatalogSource::load
//!        ▼
//!   Vec<Video> ──► VideoCatalog (read-only, indexed by id and title)
//! ```

pub mod catalog;
pub mod source;

pub use catalog::VideoCatalog;
pub use source::{
    load_catalog, parse_delimited, source_for_path, CatalogError, CatalogSource,
    DelimitedFileSource, JsonFileSource,
};
