use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::property::Property;

/// Fuzzy scoring of properties against free-text words
pub struct PropertyMatcher {
    matcher: SkimMatcherV2,
}

impl Default for PropertyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Sum of per-word scores, or None if any word fails to match.
    /// No words matches everything with score 0.
    pub fn score(&self, property: &Property, words: &[String]) -> Option<i64> {
        let haystack = haystack(property);
        words.iter().try_fold(0i64, |total, word| {
            self.matcher
                .fuzzy_match(&haystack, word)
                .map(|score| total + score)
        })
    }

    /// Matching properties, best first; ties keep their original order
    pub fn rank<'a>(&self, properties: impl Iterator<Item = &'a Property>, words: &[String]) -> Vec<&'a Property> {
        let mut scored: Vec<(i64, &Property)> = properties
            .filter_map(|p| self.score(p, words).map(|score| (score, p)))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, p)| p).collect()
    }
}

fn haystack(property: &Property) -> String {
    let mut text = format!("{} {}", property.name, property.kind);
    if let Some(city) = &property.city {
        text.push(' ');
        text.push_str(city);
    }
    for secondary in &property.secondaries {
        text.push(' ');
        text.push_str(secondary);
    }
    text
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
