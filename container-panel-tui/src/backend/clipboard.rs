//! 系统剪贴板实现
//!
//! 按操作系统选择剪贴板命令：
//! - macOS: pbcopy
//! - Linux: xclip，失败时回退 xsel
//! - Windows: clip.exe

use std::io::Write;
use std::process::{Command, Stdio};

use container_panel_core::{Clipboard, CoreError, CoreResult};

/// 基于子进程的系统剪贴板
#[derive(Debug, Clone, Copy, Default)]
pub struct OsClipboard;

impl OsClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for OsClipboard {
    fn copy(&self, text: &str) -> CoreResult<()> {
        copy_to_clipboard(text)
    }
}

#[cfg(target_os = "macos")]
fn copy_to_clipboard(text: &str) -> CoreResult<()> {
    pipe_to(Command::new("pbcopy"), text)
}

#[cfg(target_os = "linux")]
fn copy_to_clipboard(text: &str) -> CoreResult<()> {
    // 先尝试 xclip，再回退 xsel
    let mut xclip = Command::new("xclip");
    xclip.args(["-selection", "clipboard"]);
    if pipe_to(xclip, text).is_ok() {
        return Ok(());
    }

    let mut xsel = Command::new("xsel");
    xsel.args(["--clipboard", "--input"]);
    pipe_to(xsel, text)
        .map_err(|e| CoreError::Clipboard(format!("{e}. Install xclip or xsel.")))
}

#[cfg(target_os = "windows")]
fn copy_to_clipboard(text: &str) -> CoreResult<()> {
    pipe_to(Command::new("clip"), text)
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn copy_to_clipboard(_text: &str) -> CoreResult<()> {
    Err(CoreError::Clipboard(
        "Clipboard not supported on this platform".to_string(),
    ))
}

/// 将文本写入命令的标准输入并等待其退出
#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn pipe_to(mut command: Command, text: &str) -> CoreResult<()> {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| CoreError::Clipboard(format!("Failed to spawn clipboard command: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| CoreError::Clipboard(format!("Failed to write to clipboard: {e}")))?;
    }

    let status = child
        .wait()
        .map_err(|e| CoreError::Clipboard(format!("Failed to wait for clipboard command: {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(CoreError::Clipboard(
            "Clipboard command exited with error".to_string(),
        ))
    }
}
