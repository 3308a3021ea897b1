//! Output rendering for mapped portfolios and extraction results

pub mod formatter;
