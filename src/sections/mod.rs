//! Password evaluation sections
//!
//! Each section checks one aspect of the password and reports one
//! `CriterionResult` per criterion it covers, in display order.

mod length;
mod pattern;
mod variety;

pub use length::length_section;
pub use pattern::common_pattern_section;
pub use variety::character_variety_section;
