// SPDX-License-Identifier: MPL-2.0
//! `person_lens` is a desktop client for a person similarity search service,
//! built with the Iced GUI framework.
//!
//! A free-text description or a photograph is sent to a remote HTTP API and
//! the ranked matches are shown as a grid of image cards with their metadata.
//! All matching happens in the service; this crate handles the request
//! contract, the page state and the presentation.

#![doc(html_root_url = "https://docs.rs/person_lens/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod search;
pub mod ui;
