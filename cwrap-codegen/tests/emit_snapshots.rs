//! Snapshot tests for emitted C text.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::collections::BTreeMap;

use cwrap_codegen::{DeclarationPair, add_line_directives, emit_declaration_pair};
use cwrap_core::encode;

fn version_pair() -> DeclarationPair {
    let values = BTreeMap::from([
        ("version", "0.01"),
        ("author", "Michael Caine"),
        ("motto", "\"Not a lot of people know that\""),
    ]);
    emit_declaration_pair("my.c", &values, "").expect("valid declarations")
}

#[test]
fn test_declaration_source() {
    insta::assert_snapshot!("declaration_source", version_pair().c_text());
}

#[test]
fn test_declaration_header() {
    insta::assert_snapshot!("declaration_header", version_pair().h_text());
}

#[test]
fn test_stamped_header() {
    let pair = version_pair().stamped("cwrap");
    insta::assert_snapshot!("stamped_header", pair.h_text());
}

#[test]
fn test_multi_line_literal() {
    let literal = encode("Usage: %s [options]\n\t-h  show \"help\"\n", true);
    insta::assert_snapshot!("multi_line_literal", literal.to_string());
}

#[test]
fn test_line_directives() {
    let text = add_line_directives("static int a;\nstatic int b;", "gen.c");
    insta::assert_snapshot!("line_directives", text);
}
