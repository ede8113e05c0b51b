// Per-user session state: in-memory store, export bundle, flat-file
// save/load and shareable links.

pub mod bundle;
pub mod handlers;
pub mod share;
pub mod storage;
pub mod store;
