//! CI glue that links pull requests to their Notion tracking notes.
//!
//! On a branch push, the binary derives a branch identifier from the branch
//! name, looks up the matching tracking note in Notion, marks it in progress
//! with a link to the pull request, and rewrites the pull request's title and
//! description to point back at the note.
//!
//! The flow is a single linear pass (see [`sync::run`]); the only piece with
//! real logic is the idempotent description merge in [`description`].

pub mod config;
pub mod description;
pub mod error;
pub mod platform;
pub mod sync;
pub mod tracker;
pub mod types;
