#![doc = include_str!("../README.md")]

mod explicit;
mod prefix;

pub use explicit::print_explicit;
pub use prefix::{render, transpile};
