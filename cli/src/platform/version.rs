//! # Platform Version Strings
//!
//! File: cli/src/platform/version.rs
//!
//! ## Overview
//!
//! Produces the `getPlatformVersion` value. Desktop versions are queried once
//! and cached. Mobile embedders pass the version they already know.
//!
//! ```text
//! macOS 14.4      (sw_vers -productVersion)
//! Windows 10+     (ver)
//! Linux #1 SMP... (uname version field)
//! Android 14 / iOS 17.4
//! ```
//!
use once_cell::sync::Lazy;
#[cfg(any(target_os = "macos", windows))]
use std::process::Command;

/// Cached version string of the desktop this process runs on.
static DESKTOP_VERSION: Lazy<String> = Lazy::new(query_desktop_version);

/// Version string of the compiled desktop target, e.g. `Linux #1 SMP ...`.
pub fn desktop() -> String {
    DESKTOP_VERSION.clone()
}

pub fn android(release: &str) -> String {
    format!("Android {}", release)
}

pub fn ios(system_version: &str) -> String {
    format!("iOS {}", system_version)
}

pub fn macos(product_version: Option<&str>) -> String {
    match product_version {
        Some(version) => format!("macOS {}", version),
        None => "macOS".to_string(),
    }
}

/// Buckets the `ver` output the way the plugin reports Windows releases.
pub fn windows(ver_output: Option<&str>) -> String {
    match ver_output.and_then(parse_windows_version) {
        Some((major, _)) if major >= 10 => "Windows 10+".to_string(),
        Some((6, minor)) if minor >= 2 => "Windows 8".to_string(),
        Some((6, 1)) => "Windows 7".to_string(),
        _ => "Windows".to_string(),
    }
}

pub fn linux(kernel_version: Option<&str>) -> String {
    match kernel_version {
        Some(version) => format!("Linux {}", version),
        None => "Linux".to_string(),
    }
}

/// Extracts (major, minor) from `Microsoft Windows [Version 10.0.19045.3803]`.
fn parse_windows_version(output: &str) -> Option<(u32, u32)> {
    let start = output.find("Version ")? + "Version ".len();
    let rest = &output[start..];
    let end = rest.find(']').unwrap_or(rest.len());
    let mut parts = rest[..end].trim().split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    Some((major, minor))
}

#[cfg(any(target_os = "macos", windows))]
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}

#[cfg(target_os = "macos")]
fn query_desktop_version() -> String {
    macos(command_stdout("sw_vers", &["-productVersion"]).as_deref())
}

#[cfg(windows)]
fn query_desktop_version() -> String {
    windows(command_stdout("cmd", &["/C", "ver"]).as_deref())
}

#[cfg(all(unix, not(target_os = "macos")))]
fn query_desktop_version() -> String {
    linux(uname_version().as_deref())
}

/// The `version` field of uname(2).
#[cfg(all(unix, not(target_os = "macos")))]
fn uname_version() -> Option<String> {
    // SAFETY: utsname is plain old data; uname fills it with NUL-terminated strings.
    let mut data: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut data) } != 0 {
        return None;
    }
    let version = unsafe { std::ffi::CStr::from_ptr(data.version.as_ptr()) };
    Some(version.to_string_lossy().into_owned())
}
