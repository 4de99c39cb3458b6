use std::collections::BTreeSet;

use super::super::{context::TableKind, exit_status::ExitStatus};
use crate::{
    actions::{InjectOutcome, NormalizeOutcome},
    rules::{MissingTranslations, TableVerification, completion_rate},
};

/// Per-table result. `outcome` is `None` when the table file does not exist.
#[derive(Debug)]
pub struct TableReport<T> {
    pub kind: TableKind,
    pub path: String,
    pub outcome: Option<T>,
}

impl<T> TableReport<T> {
    pub fn found(&self) -> Option<&T> {
        self.outcome.as_ref()
    }
}

/// Outcome of an edit plus whether the file was rewritten.
#[derive(Debug)]
pub struct EditReport<O> {
    pub outcome: O,
    pub saved: bool,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub tables: Vec<TableReport<MissingTranslations>>,
}

impl CheckSummary {
    /// Number of strings needing translations across all tables.
    pub fn missing_count(&self) -> usize {
        self.tables
            .iter()
            .filter_map(TableReport::found)
            .map(|missing| missing.len())
            .sum()
    }
}

#[derive(Debug)]
pub struct AddSummary {
    /// Only tables that had translations supplied.
    pub tables: Vec<TableReport<EditReport<InjectOutcome>>>,
    pub dry_run: bool,
}

impl AddSummary {
    pub fn added_count(&self) -> usize {
        self.tables
            .iter()
            .filter_map(TableReport::found)
            .map(|report| report.outcome.added.len())
            .sum()
    }
}

#[derive(Debug)]
pub struct NormalizeSummary {
    pub tables: Vec<TableReport<EditReport<NormalizeOutcome>>>,
    pub dry_run: bool,
}

impl NormalizeSummary {
    pub fn renamed_count(&self) -> usize {
        self.tables
            .iter()
            .filter_map(TableReport::found)
            .map(|report| report.outcome.renamed.len())
            .sum()
    }
}

#[derive(Debug)]
pub struct VerifySummary {
    pub tables: Vec<TableReport<TableVerification>>,
    /// `None` unless both tables exist.
    pub duplicates: Option<BTreeSet<String>>,
    pub fail_on_duplicates: bool,
}

impl VerifySummary {
    pub fn total(&self) -> usize {
        self.found().map(|v| v.total).sum()
    }

    pub fn complete(&self) -> usize {
        self.found().map(|v| v.complete).sum()
    }

    pub fn missing_count(&self) -> usize {
        self.found().map(|v| v.missing.len()).sum()
    }

    pub fn duplicate_count(&self) -> usize {
        self.duplicates.as_ref().map_or(0, BTreeSet::len)
    }

    pub fn completion_rate(&self) -> f64 {
        completion_rate(self.complete(), self.total())
    }

    pub fn is_success(&self) -> bool {
        self.missing_count() == 0 && !(self.fail_on_duplicates && self.duplicate_count() > 0)
    }

    fn found(&self) -> impl Iterator<Item = &TableVerification> {
        self.tables.iter().filter_map(TableReport::found)
    }
}

#[derive(Debug)]
pub struct CompleteSummary {
    pub check: CheckSummary,
    /// `None` when no translations were supplied for either table.
    pub add: Option<AddSummary>,
    pub normalize: NormalizeSummary,
    pub verify: VerifySummary,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Add(AddSummary),
    Normalize(NormalizeSummary),
    Verify(VerifySummary),
    Complete(Box<CompleteSummary>),
    Init(InitSummary),
}

/// Result of running a command: what to report and how to exit.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}
