//! Bilingual (Portuguese/English) website for the View Arquitetura studio.
//!
//! Content lives in static catalogs, pages are rendered server-side and every
//! page exists once per locale under a `/{locale}` path prefix.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod i18n;
pub mod render;
pub mod routes;
pub mod server;
