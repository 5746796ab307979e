use thiserror::Error;

pub mod afltables;
pub mod teams;

/// Errors raised while retrieving or parsing raw fixture data. Kept apart
/// from the engine's `ProcessorError` so the core stays free of I/O concerns.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to fetch fixture data: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("line {line}: unknown round label `{label}`")]
    UnknownRound { line: usize, label: String },

    #[error("line {line}: no state mapping for team `{team}`")]
    UnknownTeam { line: usize, team: String }
}
