// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern: each component renders from a
//! `ViewContext`, handles its own `Message`s and reports an `Event` to the application.
//!
//! # Search Page
//!
//! - [`logo`] - Application wordmark
//! - [`mode_toggle`] - Text/image mode selector
//! - [`text_search`] - Description input and search button
//! - [`image_search`] - Drop zone, file picker and preview
//! - [`result_count`] - Result count field, step buttons and track
//! - [`results`] - Skeletons while loading, then the result grid
//! - [`empty_state`] - Hint and example queries before the first search
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod empty_state;
pub mod icons;
pub mod image_search;
pub mod logo;
pub mod mode_toggle;
pub mod notifications;
pub mod result_count;
pub mod results;
pub mod styles;
pub mod text_search;
pub mod theming;
pub mod widgets;
