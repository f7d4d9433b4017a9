//! Generation of the VS Code C/C++ IntelliSense configuration.
//! A common fragment is shallow-merged with the fragment of the host
//! platform and written to `.vscode/c_cpp_properties.json`.

use crate::constants::PROPERTIES_VERSION;
use crate::error::Result;
use crate::platform::Platform;
use crate::workspace::Workspace;
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;

/// Ordered set of IntelliSense settings.
pub type Fragment = IndexMap<String, Value>;

/// Top-level structure of `c_cpp_properties.json`.
#[derive(Debug, Serialize)]
pub struct PropertiesDocument {
    pub configurations: Vec<Fragment>,
    pub version: u32,
}

/// Inputs of a single emit run.
#[derive(Debug, Clone)]
pub struct EmitConfig {
    pub workspace: Workspace,
    /// Host platform identifier, e.g. `Darwin` or `Linux`.
    pub platform: String,
}

/// Outcome of a successful emit run.
#[derive(Debug)]
pub struct Emitted {
    pub path: PathBuf,
    pub platform: Platform,
}

fn fragment<const N: usize>(entries: [(&str, Value); N]) -> Fragment {
    entries.into_iter().map(|(key, value)| (key.to_string(), value)).collect()
}

/// Settings shared by every platform.
pub fn common_fragment() -> Fragment {
    fragment([
        ("name", json!("AVR")),
        ("defines", json!(["F_CPU=8000000UL"])),
        ("cStandard", json!("c11")),
        ("cppStandard", json!("c++17")),
        ("intelliSenseMode", json!("gcc-x64")),
    ])
}

/// Toolchain paths for `platform`.
pub fn platform_fragment(platform: Platform) -> Fragment {
    match platform {
        Platform::Darwin => fragment([
            (
                "includePath",
                json!([
                    "${workspaceFolder}/**",
                    "/opt/homebrew/Cellar/avr-gcc@9/9.5.0/avr/include",
                    "/opt/homebrew/Cellar/avr-gcc@9/9.5.0/lib/avr-gcc/9/gcc/avr/9.5.0/include",
                    "/opt/homebrew/Cellar/avr-gcc@9/9.5.0/lib/avr-gcc/9/gcc/avr/9.5.0/include-fixed",
                ]),
            ),
            ("compilerPath", json!("/opt/homebrew/bin/avr-gcc")),
            (
                "browse",
                json!({
                    "path": [
                        "${workspaceFolder}/**",
                        "/opt/homebrew/Cellar/avr-gcc@9/9.5.0/avr/include",
                    ],
                    "limitSymbolsToIncludedHeaders": true,
                }),
            ),
        ]),
        Platform::Linux => fragment([
            (
                "includePath",
                json!([
                    "${workspaceFolder}/**",
                    "/usr/lib/avr/include",
                    "/usr/lib/gcc/avr/11/include",
                    "/usr/lib/gcc/avr/9/include",
                    "/usr/include",
                ]),
            ),
            ("compilerPath", json!("/usr/bin/avr-gcc")),
            (
                "browse",
                json!({
                    "path": [
                        "${workspaceFolder}/**",
                        "/usr/lib/avr/include",
                    ],
                    "limitSymbolsToIncludedHeaders": true,
                }),
            ),
        ]),
    }
}

/// Shallow merge: keys of `overlay` replace those of `base` in place,
/// new keys are appended in `overlay` order.
pub fn merge_fragments(base: &Fragment, overlay: &Fragment) -> Fragment {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Builds the full document for `platform`.
pub fn build_document(platform: Platform) -> PropertiesDocument {
    let merged = merge_fragments(&common_fragment(), &platform_fragment(platform));
    PropertiesDocument { configurations: vec![merged], version: PROPERTIES_VERSION }
}

/// Renders the document for `platform` as pretty-printed JSON.
pub fn render_document(platform: Platform) -> Result<String> {
    Ok(serde_json::to_string_pretty(&build_document(platform))?)
}

/// Writes `c_cpp_properties.json` for the configured platform.
///
/// # Errors
/// * `Error::UnsupportedPlatform` if the platform is not in the table; nothing is written
/// * `Error::IoError` if the directory or file cannot be written
pub fn emit(config: &EmitConfig) -> Result<Emitted> {
    let platform: Platform = config.platform.parse()?;
    let content = render_document(platform)?;

    let path = config.workspace.properties_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    debug!("Writing {} for {}", path.display(), platform);
    fs::write(&path, content)?;

    Ok(Emitted { path, platform })
}
