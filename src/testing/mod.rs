//! Test and demo helpers.
//!
//! [`data`] holds seeded generators for synthetic experiments in the
//! row-per-variable layout read by [`crate::data::io::read_csv`].

pub mod data;
