use std::sync::Arc;

use regex::Regex;

use crate::candidate::Candidate;
use crate::config::Criteria;
use crate::error::SiftError;
use crate::traits::PathFilter;

/// A [`Criteria`] with its patterns compiled, ready to test candidates.
pub(crate) struct CompiledCriteria {
    patterns:  Vec<Regex>,
    start:     Vec<String>,
    content:   Vec<String>,
    end:       Vec<String>,
    extension: Vec<String>,
    filter:    Option<Arc<dyn PathFilter>>,
}

impl CompiledCriteria {
    /// Compile every pattern up front so a bad regex fails before any
    /// filesystem access.
    pub fn compile(criteria: &Criteria) -> Result<Self, SiftError> {
        let patterns = criteria
            .pattern
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|source| SiftError::InvalidPattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            patterns,
            start:     criteria.start.clone(),
            content:   criteria.content.clone(),
            end:       criteria.end.clone(),
            extension: criteria.extension.clone(),
            filter:    criteria.filter.clone(),
        })
    }

    /// Inclusion: every group with terms has at least one satisfied term.
    /// Empty groups are vacuously satisfied.
    pub fn matches_all(&self, c: &Candidate<'_>) -> Result<bool, SiftError> {
        let name = c.base_name();
        let ok = (self.start.is_empty() || self.start.iter().any(|s| name.starts_with(s.as_str())))
            && (self.content.is_empty() || self.content.iter().any(|s| name.contains(s.as_str())))
            && (self.end.is_empty() || self.end.iter().any(|s| name.ends_with(s.as_str())))
            && (self.extension.is_empty() || self.extension.iter().any(|e| e == c.extension()))
            && (self.patterns.is_empty() || self.patterns.iter().any(|re| matches_at_start(re, name)));

        if !ok {
            return Ok(false);
        }
        match &self.filter {
            Some(f) => f.check(c.path).map_err(SiftError::Filter),
            None    => Ok(true),
        }
    }

    /// Exclusion: any single satisfied term in any group.
    /// Empty groups are vacuously unsatisfied.
    pub fn matches_any(&self, c: &Candidate<'_>) -> Result<bool, SiftError> {
        let name = c.base_name();
        let hit = self.start.iter().any(|s| name.starts_with(s.as_str()))
            || self.content.iter().any(|s| name.contains(s.as_str()))
            || self.end.iter().any(|s| name.ends_with(s.as_str()))
            || self.extension.iter().any(|e| e == c.extension())
            || self.patterns.iter().any(|re| matches_at_start(re, name));

        if hit {
            return Ok(true);
        }
        match &self.filter {
            Some(f) => f.check(c.path).map_err(SiftError::Filter),
            None    => Ok(false),
        }
    }
}

/// Anchored at the start only: the match need not reach the end of `name`.
/// The leftmost match starts at 0 whenever any match does.
fn matches_at_start(re: &Regex, name: &str) -> bool {
    re.find(name).is_some_and(|m| m.start() == 0)
}
