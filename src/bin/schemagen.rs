//! Configuration Schema Generator
//!
//! This binary generates JSON Schemas describing the configuration accepted
//! for each supported manifest kind.
//!
//! Usage: cargo run --bin schemagen > schemas/all.json

use cnpg_manifest_gen::crd::generate_schemas;

fn main() {
    for schema in generate_schemas() {
        println!("{}", schema);
    }
}
