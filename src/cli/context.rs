//! Resolved configuration for one CLI run.

use std::{
    env, fmt,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::args::{CommonArgs, TranslationArgs};
use crate::{
    catalog::CatalogFile,
    config::{Config, load_config},
    locales::TargetLocaleSet,
};

/// Which of the two string tables a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Ui,
    Main,
}

impl TableKind {
    pub const ALL: [TableKind; 2] = [TableKind::Ui, TableKind::Main];
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Ui => write!(f, "UI table"),
            TableKind::Main => write!(f, "main table"),
        }
    }
}

pub struct RunContext {
    pub config: Config,
    pub locales: TargetLocaleSet,
    /// Directory paths are reported relative to.
    pub base_dir: PathBuf,
    /// Command-line paths resolve against this directory.
    cwd: PathBuf,
    ui_table: PathBuf,
    main_table: PathBuf,
}

impl RunContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        let root = match &args.root {
            Some(root) => cwd.join(root),
            None => cwd.clone(),
        };

        let loaded = load_config(&root)?;
        let base_dir = loaded.base_dir;
        debug!(
            base_dir = %base_dir.display(),
            from_file = loaded.from_file,
            "configuration loaded"
        );

        let ui_table = match &args.ui_table {
            Some(path) => cwd.join(path),
            None => base_dir.join(&loaded.config.ui_table),
        };
        let main_table = match &args.main_table {
            Some(path) => cwd.join(path),
            None => base_dir.join(&loaded.config.main_table),
        };

        Ok(Self {
            locales: loaded.config.locales(),
            config: loaded.config,
            base_dir,
            cwd,
            ui_table,
            main_table,
        })
    }

    pub fn table_path(&self, kind: TableKind) -> &Path {
        match kind {
            TableKind::Ui => &self.ui_table,
            TableKind::Main => &self.main_table,
        }
    }

    /// Path for display, relative to the project when possible.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.base_dir)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    pub fn open_table(&self, kind: TableKind) -> Result<Option<CatalogFile>> {
        CatalogFile::open_if_exists(self.table_path(kind))
    }

    /// Injector input for a table: the command line wins over the config file.
    pub fn translations_path(&self, kind: TableKind, args: &TranslationArgs) -> Option<PathBuf> {
        let (from_args, from_config) = match kind {
            TableKind::Ui => (&args.ui, &self.config.ui_translations),
            TableKind::Main => (&args.main, &self.config.main_translations),
        };
        match (from_args, from_config) {
            (Some(path), _) => Some(self.cwd.join(path)),
            (None, Some(path)) => Some(self.base_dir.join(path)),
            (None, None) => None,
        }
    }
}
