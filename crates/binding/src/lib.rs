//! Contract interface descriptors.
//!
//! Each contract's JSON ABI is embedded at build time from `abi/` and exposed
//! verbatim, with an optional typed view through `alloy-json-abi`.

pub mod market;

pub use market::{abi, json_abi, ABI, ABI_JSON};
