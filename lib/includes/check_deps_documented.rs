// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Shared by every crate's integration tests through `include!`.
// Tests run from the crate root, so both files are resolved relative to it.

#[test]
fn check_deps_documented() {
    use std::collections::BTreeSet;

    let manifest =
        std::fs::read_to_string("Cargo.toml").expect("Cargo.toml should be readable");
    let manifest =
        toml::from_str::<toml::Table>(&manifest).expect("Cargo.toml should not be malformed");

    let listed_deps = ["dependencies", "build-dependencies", "dev-dependencies"]
        .iter()
        .filter_map(|&section| manifest.get(section).and_then(toml::Value::as_table))
        .flat_map(|table| table.keys().cloned())
        .collect::<BTreeSet<_>>();

    let documented =
        std::fs::read_to_string("DEPS.md").expect("DEPS.md should be readable");
    let documented_deps = documented
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .map(|dep| dep.trim().to_string())
        .collect::<BTreeSet<_>>();

    let undocumented = listed_deps.difference(&documented_deps).collect::<Vec<_>>();
    let stale = documented_deps.difference(&listed_deps).collect::<Vec<_>>();

    assert!(
        undocumented.is_empty(),
        "some Cargo.toml dependencies are not in DEPS.md: {undocumented:?}"
    );
    assert!(
        stale.is_empty(),
        "DEPS.md lists dependencies no longer present in Cargo.toml: {stale:?}"
    );
}
