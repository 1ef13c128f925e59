//! Static viewer bundle generation for sdoc.
//!
//! A bundle is a directory that opens in a browser without a server:
//! the template page, its stylesheet, the renderer script and a data
//! script carrying the whole manifest with document bodies.

mod builder;

pub use builder::{BuildError, BuildReport, DATA_SCRIPT, StaticSiteBuilder};
