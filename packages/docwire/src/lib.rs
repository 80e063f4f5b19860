//! DocWire: a tagged-union wire codec for schemaless document stores,
//! plus the collection client that speaks it over HTTP.
//!
//! This crate re-exports the public surface of `docwire-value` (the
//! pure codec) and `docwire-client` (the network half) under one name.

pub use docwire_client::{CollectionClient, Error, FilterOp, ListOptions};
pub use docwire_value::{
    decode_document, encode_fields, fields, scalar_to_wire, value_to_wire, wire, wire_to_value,
    Document, ResourcePath, Scalar, Value,
};
