// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO hook calls
// - Explicit SQL only

pub mod keyword_repository;

pub use keyword_repository::{KeywordRepository, KeywordsByLocale, SqliteKeywordRepository};

#[cfg(test)]
pub use keyword_repository::MockKeywordRepository;
