// src/lib.rs: CTF Toolbox transformation logic
//
// Everything in here is pure and runs on the host as well as in the browser,
// so the tools can be unit-tested without wasm. The Yew front-end lives in
// src/main.rs + src/ui/.

pub mod base64;
pub mod caesar;
pub mod catalog;
pub mod config;
pub mod convert;
pub mod diff;
pub mod error;
pub mod frequency;
pub mod hash;
pub mod html;
pub mod qr;
pub mod regex_tester;
pub mod reverse;
pub mod url;
pub mod xor;

pub use error::{Result, ToolError};
