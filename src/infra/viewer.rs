// ============================================================
// Layer 6 - System Viewer Hook
// ============================================================
// Opens a finished report in the desktop's default PDF viewer.
// This is platform specific and entirely optional: the CLI only
// installs it with --open, and a failure here is logged, never
// fatal.
//
//   Linux   → xdg-open <file>
//   macOS   → open <file>
//   Windows → cmd /C start "" <file>

use anyhow::{Context, Result};
use std::{path::Path, process::Command};

use crate::domain::traits::ReportHook;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

impl SystemViewer {
    #[cfg(target_os = "linux")]
    fn command(path: &Path) -> Command {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }

    #[cfg(target_os = "macos")]
    fn command(path: &Path) -> Command {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    }

    #[cfg(target_os = "windows")]
    fn command(path: &Path) -> Command {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    fn command(path: &Path) -> Command {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

impl ReportHook for SystemViewer {
    fn after_render(&self, report_path: &Path) -> Result<()> {
        tracing::debug!("Opening '{}' in the default viewer", report_path.display());
        Self::command(report_path)
            .spawn()
            .with_context(|| format!("Cannot open '{}' in a viewer", report_path.display()))?;
        Ok(())
    }
}
