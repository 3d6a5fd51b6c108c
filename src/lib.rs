#![crate_type = "lib"]
#![crate_name = "datablock_encoder"]

pub mod block;
pub mod common;
pub mod config;
pub mod schema;
pub mod value;
