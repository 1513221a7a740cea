//! Browser glue that has no home in a specific page or state module.

pub mod browser;
