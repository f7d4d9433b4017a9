//! Workspace layout.
//! Every path avrkit reads or writes is derived from one root directory,
//! so callers (and tests) decide where the utilities operate.

use crate::constants::{PROPERTIES_FILE, TEMPLATE_DIR, VSCODE_DIR};
use std::path::{Path, PathBuf};

/// Root directory holding the template, the editor settings and generated projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory copied by the scaffolder.
    pub fn template_dir(&self) -> PathBuf {
        self.root.join(TEMPLATE_DIR)
    }

    /// Location of the generated IntelliSense configuration.
    pub fn properties_path(&self) -> PathBuf {
        self.root.join(VSCODE_DIR).join(PROPERTIES_FILE)
    }

    /// Location of a project named `name`.
    pub fn project_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_paths() {
        let workspace = Workspace::new("/work");
        assert_eq!(workspace.root(), Path::new("/work"));
        assert_eq!(workspace.template_dir(), PathBuf::from("/work/template"));
        assert_eq!(
            workspace.properties_path(),
            PathBuf::from("/work/.vscode/c_cpp_properties.json")
        );
        assert_eq!(workspace.project_dir("blink"), PathBuf::from("/work/blink"));
    }
}
