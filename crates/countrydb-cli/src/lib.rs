//! The `countrydb` binary resolves country names and ISO 3166-1 codes from
//! a shell. This library target has no API of its own; the commands live
//! in `main.rs`.
//!
//! | command                     | prints                                        |
//! |-----------------------------|-----------------------------------------------|
//! | `get <token>`               | the full record for any name or code          |
//! | `search <query>`            | scored, accent-insensitive matches            |
//! | `find --continent <name>`   | countries on that continent                   |
//! | `phone <prefix>`            | countries whose calling code has that prefix  |
//! | `audit <rows.json>`         | disagreements between another table and ours |
//! | `collisions`                | aliases a later country took over             |
//! | `build <src> <out>`         | a bincode snapshot of a JSON dataset          |
//! | `stats`, `countries`        | totals, every country                         |
//!
//! A token that matches nothing is reported on stderr and the exit status
//! stays 0. Only unreadable or rejected datasets make the command fail.
//!
//! The table comes from the dataset bundled in `countrydb-core` unless
//! `--input` names a `.json`, `.json.gz` or `.bin` file. `--filter GB,IE`
//! narrows it and `--strict` refuses datasets with shared aliases.
//! `-v` or `RUST_LOG` controls the `tracing` output on stderr.
#![cfg_attr(docsrs, feature(doc_cfg))]
