//! custif-style: responsive stylesheet generation.
//!
//! Turns an ordered list of `(selector, property, per-breakpoint value)` rules
//! into stylesheet text with two media-query breakpoints:
//! - desktop: no media query
//! - tablet: `@media (max-width: 1024px)`
//! - mobile: `@media (max-width: 767px)`
//!
//! Rules are never merged. Each rule becomes its own `selector { ... }` block
//! and insertion order is kept inside every breakpoint, so a later rule for
//! the same selector and property wins the cascade.

pub mod generate;
pub mod rule;
pub mod sheet;

pub use generate::*;
pub use rule::*;
pub use sheet::*;
