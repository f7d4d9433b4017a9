//! Fixed names and paths used throughout avrkit.

/// Template directory, relative to the workspace root
pub const TEMPLATE_DIR: &str = "template";

/// Editor settings directory, relative to the workspace root
pub const VSCODE_DIR: &str = ".vscode";

/// IntelliSense configuration file inside [`VSCODE_DIR`]
pub const PROPERTIES_FILE: &str = "c_cpp_properties.json";

/// Build configuration file inside a scaffolded project
pub const MAKEFILE: &str = "Makefile";

/// Schema version of `c_cpp_properties.json`
pub const PROPERTIES_VERSION: u32 = 4;
