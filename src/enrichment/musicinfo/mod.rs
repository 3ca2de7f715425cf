//! Music info service integration
//!
//! Looks up release date, lyrics and link for a (group, song) pair from the
//! upstream `GET /info?group=&song=` endpoint.

pub mod dto;
mod adapter;
mod client;

pub use client::MusicInfoClient;
