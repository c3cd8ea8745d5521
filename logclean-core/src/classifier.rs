// logclean-core/src/classifier.rs
//! Line classification.
//!
//! The `LineClassifier` trait decouples the rewriter from the matching rule.
//! [`Config`] implements it with the identifier-group rule: AND within a
//! group, OR across groups, plain case-sensitive substring matching.
//!
//! License: MIT OR APACHE 2.0

use crate::config::Config;

/// Outcome of classifying a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Keep,
    Remove,
}

/// Decides whether a log line stays in the cleaned file.
///
/// Implementations must be pure: the same line always yields the same verdict.
pub trait LineClassifier {
    fn classify(&self, line: &str) -> Verdict;
}

/// Classifies `line` against the identifier groups of `config`.
///
/// Stops at the first group whose terms all occur in the line.
pub fn classify(line: &str, config: &Config) -> Verdict {
    if config.identifiers.iter().any(|group| group.matches(line)) {
        Verdict::Remove
    } else {
        Verdict::Keep
    }
}

impl LineClassifier for Config {
    fn classify(&self, line: &str) -> Verdict {
        classify(line, self)
    }
}

impl<T: LineClassifier + ?Sized> LineClassifier for &T {
    fn classify(&self, line: &str) -> Verdict {
        (**self).classify(line)
    }
}
