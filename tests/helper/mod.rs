#![allow(dead_code)]

pub mod clients;

pub use clients::*;
