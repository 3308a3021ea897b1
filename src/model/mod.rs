//! Data structures for CV documents and mapped portfolio output

pub mod cv;
pub mod view;
