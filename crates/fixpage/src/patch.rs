use std::path::{Path, PathBuf};

use itertools::Itertools;
use tracing::{debug, warn};
use tracing_attributes::instrument;

use crate::{
    error::{Error, Result},
    rules::{Replacement, RuleOutcome},
};

/// Whether [`Patch::apply_to_file`] writes the result back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    #[default]
    InPlace,
    DryRun,
}

/// An ordered list of rules. Each rule sees the output of the previous one.
#[derive(Debug, Clone, Copy)]
pub struct Patch {
    rules: &'static [Replacement],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchedContent {
    pub content: String,
    /// One entry per rule, in application order.
    pub outcomes: Vec<(&'static str, RuleOutcome)>,
}

impl PatchedContent {
    pub fn changed(&self) -> bool {
        self.outcomes.iter().any(|(_, outcome)| outcome.changed())
    }

    /// Names of the rules whose source text was not found.
    pub fn missed(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == RuleOutcome::NotFound)
            .map(|(name, _)| *name)
    }
}

#[derive(Debug)]
pub struct PatchReport {
    pub path: PathBuf,
    pub patched: PatchedContent,
    pub written: bool,
}

impl Patch {
    pub const fn new(rules: &'static [Replacement]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [Replacement] {
        self.rules
    }

    pub fn apply(&self, content: &str) -> PatchedContent {
        let mut content = content.to_owned();
        let mut outcomes = Vec::with_capacity(self.rules.len());
        for rule in self.rules {
            let (next, outcome) = rule.apply(&content);
            match outcome {
                RuleOutcome::Applied { occurrences } => {
                    debug!(rule = rule.name, occurrences, "applied")
                }
                RuleOutcome::AlreadyApplied => debug!(rule = rule.name, "already applied"),
                RuleOutcome::NotFound => warn!(rule = rule.name, "source text not found"),
            }
            content = next;
            outcomes.push((rule.name, outcome));
        }
        PatchedContent { content, outcomes }
    }

    /// Read `path`, apply every rule, and overwrite it unless `mode` is a dry run.
    ///
    /// The file is truncated and rewritten in one pass, with no backup. It is
    /// written even when no rule matched.
    #[instrument(skip(self), level = "info")]
    pub fn apply_to_file(&self, path: &Path, mode: WriteMode) -> Result<PatchReport> {
        let original = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_owned(),
            source,
        })?;
        let patched = self.apply(&original);
        if patched.missed().next().is_some() {
            warn!(missed = %patched.missed().join(", "), "patch partially applied");
        }
        let written = match mode {
            WriteMode::InPlace => {
                std::fs::write(path, &patched.content).map_err(|source| Error::Write {
                    path: path.to_owned(),
                    source,
                })?;
                true
            }
            WriteMode::DryRun => false,
        };
        Ok(PatchReport {
            path: path.to_owned(),
            patched,
            written,
        })
    }
}
