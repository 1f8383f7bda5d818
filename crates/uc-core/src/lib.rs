//! uc-core: conversion engine for the unit converter.
//!
//! Contains:
//! - category / unit (tagged taxonomy, display labels)
//! - registry (ordered unit lists, base units, conversion rules)
//! - convert (pure conversion through the category base unit)
//! - numeric (Real + tolerances + float helpers)
//! - si (uom SI quantities built from registry values)
//! - error (shared error types)

pub mod category;
pub mod convert;
pub mod error;
pub mod numeric;
pub mod registry;
pub mod si;
pub mod unit;

// Re-exports: nice ergonomics for downstream crates
pub use category::Category;
pub use convert::{convert, convert_named, from_base, to_base};
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use unit::{ConversionRule, Unit};
