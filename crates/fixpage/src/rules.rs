/// When a [`Replacement`] is allowed to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Plain substring replace.
    Always,
    /// Skip the rule when the marker is already in the content.
    UnlessPresent(&'static str),
}

/// What a single rule did to the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    Applied { occurrences: usize },
    NotFound,
    AlreadyApplied,
}

impl RuleOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, RuleOutcome::Applied { .. })
    }
}

/// An exact substring to exact substring mapping.
///
/// Every occurrence of `from` is replaced. Matching is byte-exact: no regex,
/// no whitespace normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
    pub name: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub guard: Guard,
}

impl Replacement {
    pub const fn new(name: &'static str, from: &'static str, to: &'static str) -> Self {
        Self {
            name,
            from,
            to,
            guard: Guard::Always,
        }
    }

    pub const fn unless_present(self, marker: &'static str) -> Self {
        Self {
            guard: Guard::UnlessPresent(marker),
            ..self
        }
    }

    pub fn apply(&self, content: &str) -> (String, RuleOutcome) {
        if let Guard::UnlessPresent(marker) = self.guard {
            if content.contains(marker) {
                return (content.to_owned(), RuleOutcome::AlreadyApplied);
            }
        }
        let occurrences = content.matches(self.from).count();
        if occurrences == 0 {
            return (content.to_owned(), RuleOutcome::NotFound);
        }
        (
            content.replace(self.from, self.to),
            RuleOutcome::Applied { occurrences },
        )
    }
}
