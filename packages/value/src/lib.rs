//! Value model and wire codec for a schemaless document store.
//!
//! This crate is the pure half of DocWire:
//! - `Value`: the native tree type an application works with
//! - `Scalar`: the subset of `Value` the filter protocol accepts
//! - `Document`: one decoded record, a short id plus its field map
//! - `ResourcePath`: the slash-delimited addressing model
//! - `wire`: the tagged-union structures as they appear on the wire
//! - `convert`: the codec between the two sides
//!
//! Both codec directions are total functions, so this crate defines no
//! error type. Network concerns live in `docwire-client`.

pub mod convert;
pub mod wire;

mod document;
mod path;
mod scalar;
mod value;

pub use convert::{decode_document, encode_fields, scalar_to_wire, value_to_wire, wire_to_value};
pub use document::Document;
pub use path::ResourcePath;
pub use scalar::Scalar;
pub use value::Value;
