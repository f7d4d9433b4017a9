//! Project scaffolding.
//! Copies the workspace template to a new project directory and applies
//! the requested Makefile overrides.

use crate::constants::MAKEFILE;
use crate::error::{Error, Result};
use crate::makefile::{apply_overrides, Overrides};
use crate::workspace::Workspace;
use log::{debug, trace};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Ensures nothing exists yet at the project path.
///
/// # Errors
/// * `Error::AlreadyExists` if a file, directory or link is present at `target`
pub fn ensure_new_target<P: AsRef<Path>>(target: P) -> Result<PathBuf> {
    let target = target.as_ref();
    if fs::symlink_metadata(target).is_ok() {
        return Err(Error::AlreadyExists { target: target.to_path_buf() });
    }
    Ok(target.to_path_buf())
}

/// Recursively copies `source` to `dest`, which must not exist yet.
///
/// File contents and permission bits are preserved. Links are followed.
/// Directory permissions are applied once their contents are copied, so
/// read-only template directories can still be copied.
pub fn copy_tree<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();
    let mut directories = Vec::new();

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source).map_err(io::Error::other)?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            trace!("Creating directory: {}", target.display());
            fs::create_dir_all(&target)?;
            directories.push((target, entry.metadata()?.permissions()));
        } else {
            trace!("Copying file: {}", target.display());
            fs::copy(entry.path(), &target)?;
        }
    }

    for (directory, permissions) in directories.into_iter().rev() {
        fs::set_permissions(directory, permissions)?;
    }
    Ok(())
}

/// Creates projects from the template of a workspace.
#[derive(Debug, Clone)]
pub struct Scaffolder {
    workspace: Workspace,
}

impl Scaffolder {
    pub fn new(workspace: Workspace) -> Self {
        Self { workspace }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Creates the project `name` and applies `overrides` to its Makefile.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the created project
    ///
    /// # Errors
    /// * `Error::AlreadyExists` if the project path is taken; nothing is copied
    /// * `Error::TemplateNotFound` if the workspace has no template directory
    /// * `Error::KeyNotFound` if an override has no line in the Makefile.
    ///   The copied project and earlier substitutions are kept.
    pub fn scaffold(&self, name: &str, overrides: &Overrides) -> Result<PathBuf> {
        let target = ensure_new_target(self.workspace.project_dir(name))?;

        let template_dir = self.workspace.template_dir();
        if !template_dir.is_dir() {
            return Err(Error::TemplateNotFound { path: template_dir });
        }

        debug!("Copying {} to {}", template_dir.display(), target.display());
        copy_tree(&template_dir, &target)?;

        if !overrides.is_empty() {
            apply_overrides(target.join(MAKEFILE), overrides)?;
        }
        Ok(target)
    }
}
