//! Startup load integration tests: store seeding, store fallback and the
//! HTTP source.

mod support;
mod http_source;
mod seeding;
