//! # Bible Architecture
//!
//! A command-line Bible reader, built as a **library with a CLI client**. The
//! core knows nothing about terminals; the binary turns its results into text.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints verses, runs the input loop     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Navigation Session (session.rs)       │
//! │  - Facade over commands, generic over both stores           │
//! │  - Interactive state machine: one line in, one result out   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + parser.rs                  │
//! │  - Reference resolution, random picks, search, bookmarks    │
//! │  - Returns `Result<CmdResult>`, never prints                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - VerseStore: read-only verse table (JSON corpus)          │
//! │  - SaveStore: bookmark/favorites document (file, memory)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## References
//!
//! Users type references as `Book Chapter Verse`. Book names may span several
//! words, so the [`parser`] reassembles them from quoted tokens
//! (`"1 John" 3 16`, `'Song of Solomon' 2 1`) before the reference is resolved
//! to a [`model::VerseId`]. Ids are dense and follow canonical order, which is
//! what makes next/previous navigation a matter of adding or subtracting one.
//!
//! ## Failure Handling
//!
//! Nothing a user types can abort the process. Unknown references, malformed
//! commands and unreadable save files all come back as messages in a
//! [`commands::CmdResult`]. The interactive session ends only on `q`/`x` or
//! when navigation walks off the end of the corpus.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`session`]: Interactive navigation state machine
//! - [`commands`]: Business logic
//! - [`parser`]: Tokenizing and book-name disambiguation
//! - [`store`]: Verse table and save document abstractions
//! - [`model`]: Core data types
//! - [`config`]: Configuration and path resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod session;
pub mod store;
