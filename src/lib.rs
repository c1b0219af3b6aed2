//! Deterministic HTTP fixture server for exercising RSS client implementations.
//!
//! The server exposes four scenario endpoints, each producing one fixed,
//! reproducible response a feed-consuming client must handle:
//!
//! - `GET /` — a well-formed RSS 2.0 feed with every field populated
//! - `GET /missing` — a spec-compliant feed with every optional `pubDate` omitted
//! - `GET /broken` — a truncated document an XML parser must reject
//! - `GET /timeout` — the baseline feed, delayed past a typical client timeout
//!
//! Every response is built fresh per request; there is no shared mutable state,
//! no persistence, and no configurability beyond the listen port.

pub mod feed;
pub mod server;
