#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod billing;
pub mod consumption;
mod prelude;
pub mod provider;
pub mod quantity;
pub mod tariff;
