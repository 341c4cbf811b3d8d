//! Headless Chrome invocation
//!
//! Chrome is driven through its command line `--screenshot` mode rather than
//! the DevTools protocol: one process per render, which writes
//! `screenshot.png` into its working directory and exits.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{Error, RenderConfig, Result, Viewport};

/// File name chrome writes in `--screenshot` mode.
pub const SCREENSHOT_FILE: &str = "screenshot.png";

const MAC_CHROME: &str = "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome";

const CHROME_NAMES: [&str; 5] = [
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
    "chrome",
];

/// Find the browser executable to use.
///
/// An explicit `config.browser` wins and is used as is. Otherwise the macOS
/// app bundle is tried (on macOS), then the usual chrome/chromium names on
/// `PATH`.
pub fn locate_browser(config: &RenderConfig) -> Result<PathBuf> {
    if let Some(browser) = &config.browser {
        return Ok(browser.clone());
    }

    if cfg!(target_os = "macos") && Path::new(MAC_CHROME).exists() {
        return Ok(PathBuf::from(MAC_CHROME));
    }

    find_in_path(&CHROME_NAMES, std::env::var_os("PATH")).ok_or_else(|| {
        Error::ToolNotFound(
            "Chrome/Chromium executable not found. Please install Chrome or Chromium.".into(),
        )
    })
}

/// First `names` entry that exists as a file in one of the `path_var` dirs.
pub(crate) fn find_in_path(names: &[&str], path_var: Option<OsString>) -> Option<PathBuf> {
    let path_var = path_var?;
    for name in names {
        for dir in std::env::split_paths(&path_var) {
            let candidate = dir.join(exe_name(name));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

fn exe_name(name: &str) -> String {
    if cfg!(windows) {
        format!("{}.exe", name)
    } else {
        name.to_string()
    }
}

/// Build the chrome command that screenshots `page` into `cwd`.
pub fn screenshot_command(browser: &Path, page: &Path, viewport: Viewport, cwd: &Path) -> Command {
    let mut cmd = Command::new(browser);
    cmd.args([
        "--headless",
        "--disable-gpu",
        "--no-sandbox",
        "--screenshot",
    ])
    .arg(format!("--window-size={},{}", viewport.width, viewport.height))
    .arg("--default-background-color=00000000")
    .arg(page)
    .current_dir(cwd);
    cmd
}

/// Run chrome and return the path of the screenshot it produced.
pub fn take_screenshot(browser: &Path, page: &Path, viewport: Viewport, cwd: &Path) -> Result<PathBuf> {
    let mut cmd = screenshot_command(browser, page, viewport, cwd);
    log::debug!("taking snapshot with chrome: {:?}; cwd: {}", cmd, cwd.display());

    let tool = browser.display().to_string();
    let output = cmd.output().map_err(|source| Error::Launch {
        tool: tool.clone(),
        source,
    })?;

    if !output.status.success() {
        return Err(Error::tool_failed(&tool, output.status, &output.stderr));
    }

    let screenshot = cwd.join(SCREENSHOT_FILE);
    if !screenshot.is_file() {
        return Err(Error::Render(format!(
            "{} exited successfully but wrote no {}",
            tool, SCREENSHOT_FILE
        )));
    }
    Ok(screenshot)
}
