// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::locale::Locale;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Move to another location (`/dashboard`, `/extraction/invoice`, `/#pricing`).
    Navigate(String),
    SetLanguage(Locale),
    ToggleLanguageMenu,
    Login,
    Logout,
    /// Open the native file picker from the upload area.
    OpenFileDialog,
    /// Result from the file picker; `None` when cancelled.
    FileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    ClearDocument,
    HistorySearch(String),
    DismissNotice,
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (`--lang`).
    pub lang: Option<String>,
    /// Initial location (`--route`).
    pub route: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
}
