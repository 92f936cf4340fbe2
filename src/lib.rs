//! # js2sql
//!
//! A library and command-line tool for compiling JSON Schema documents into
//! SQL `create table` statements with nested `row`/`array` types.
//!
//! # Features
//!
//! - Parse a JSON Schema document into a tree of schema nodes, accepting both
//!   `definitions` and `$defs` blocks for reusable sub-schemas.
//! - Resolve local `$ref` pointers (`#/definitions/...`, `#/$defs/...`)
//!   through an eagerly built reference cache, with a depth bound that turns
//!   reference cycles into reported errors.
//! - Map nested objects and arrays to `row(...)` and `array(...)` type
//!   expressions, refining `string` nodes by their `format` keyword.
//! - Emit a single deterministic `create table` statement with a synthetic
//!   `id varchar primary key` column first and the remaining columns in
//!   alphabetical order.
//!
//! # Example
//!
//! ```rust
//! fn main() -> anyhow::Result<()> {
//!     env_logger::init();
//!
//!     let schema = br##"{
//!         "type": "object",
//!         "properties": {
//!             "name": {"type": "string"},
//!             "age": {"type": "integer"},
//!             "addresses": {
//!                 "type": "array",
//!                 "items": {"$ref": "#/definitions/address"}
//!             }
//!         },
//!         "definitions": {
//!             "address": {
//!                 "type": "object",
//!                 "properties": {
//!                     "street": {"type": "string"},
//!                     "city": {"type": "string"}
//!                 }
//!             }
//!         }
//!     }"##;
//!
//!     let ddl = js2sql::ddl::compile(schema, "people")?;
//!     println!("{}", ddl);
//!     Ok(())
//! }
//! ```
pub mod ddl;
pub mod error;
pub mod mapper;
pub mod resolver;
pub mod schema;
pub mod test_utils;
