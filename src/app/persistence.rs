// SPDX-License-Identifier: MPL-2.0
//! Session state persistence logic.
//!
//! Remembers the folder of the last query image between sessions. Search
//! inputs (query, result count) stay in memory only.

use super::persisted_state::AppState;
use crate::ui::notifications::{self, Notification};
use std::path::Path;

/// Records the folder of the selected query image so the picker opens
/// there next time.
pub fn remember_image_directory(
    state: &mut AppState,
    image_path: &Path,
    notifications: &mut notifications::Manager,
) {
    let previous = state.last_open_directory.clone();
    state.set_last_open_directory_from_file(image_path);
    if state.last_open_directory != previous {
        save(state, notifications);
    }
}

/// Writes the state file.
///
/// Guarded during tests to keep isolation: unit tests exercise the state
/// changes directly and cover the file format in `persisted_state`.
fn save(state: &AppState, notifications: &mut notifications::Manager) {
    if cfg!(test) {
        return;
    }

    if let Some(key) = state.save() {
        tracing::warn!(%key, "failed to save session state");
        notifications.push(Notification::warning(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn image_directory_is_the_parent_folder() {
        let mut state = AppState::default();
        let mut manager = notifications::Manager::new();
        remember_image_directory(&mut state, Path::new("/photos/query/face.jpg"), &mut manager);
        assert_eq!(
            state.last_open_directory,
            Some(PathBuf::from("/photos/query"))
        );
    }
}
