//! Derives structured filters from free-text queries
//!
//! "cheap hotels under $150 with 4 stars" becomes the filters
//! `[Accommodation, Under 150, 4+ ★]` and the residual text "cheap".

use crate::property::PropertyType;

use super::filters::{Filter, FilterSet};

const STOPWORDS: &[&str] = &[
    "a", "an", "and", "at", "for", "in", "near", "of", "the", "to", "with",
];

const PRICE_CAP_WORDS: &[&str] = &["under", "below", "max", "upto", "<"];

/// Query split into filters and the words left for text matching
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedQuery {
    pub words: Vec<String>,
    pub filters: FilterSet,
}

impl ParsedQuery {
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Split `query` into derived filters and residual words
pub fn parse_query(query: &str) -> ParsedQuery {
    let tokens: Vec<String> = query
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| c == ',' || c == '.' || c == '!' || c == '?'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    let mut parsed = ParsedQuery::default();
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i].as_str();
        let lower = token.to_lowercase();
        let next = tokens.get(i + 1).map(|t| t.to_lowercase());

        // "things to do"
        if lower == "things"
            && next.as_deref() == Some("to")
            && tokens.get(i + 2).map(|t| t.to_lowercase()).as_deref() == Some("do")
        {
            parsed.filters.insert(Filter::Type(PropertyType::Attraction));
            i += 3;
            continue;
        }

        if let Some(kind) = type_word(&lower) {
            parsed.filters.insert(Filter::Type(kind));
            i += 1;
            continue;
        }

        if PRICE_CAP_WORDS.contains(&lower.as_str()) {
            if let Some(cap) = next.as_deref().and_then(parse_amount) {
                parsed.filters.insert(Filter::MaxPrice(cap));
                i += 2;
                continue;
            }
        }

        if let Some(rest) = lower.strip_prefix('<') {
            if let Some(cap) = parse_amount(rest) {
                parsed.filters.insert(Filter::MaxPrice(cap));
                i += 1;
                continue;
            }
        }

        if let Some(stars) = rating_token(&lower, next.as_deref()) {
            parsed.filters.insert(Filter::MinRating(stars.value));
            i += stars.consumed;
            continue;
        }

        if lower == "available" {
            parsed.filters.insert(Filter::AvailableOnly);
            i += 1;
            continue;
        }

        if !STOPWORDS.contains(&lower.as_str()) {
            parsed.words.push(token.to_string());
        }
        i += 1;
    }

    parsed
}

fn type_word(word: &str) -> Option<PropertyType> {
    match word {
        "hotel" | "hotels" | "stay" | "stays" | "accommodation" | "accommodations" | "lodging" => {
            Some(PropertyType::Accommodation)
        }
        "restaurant" | "restaurants" | "food" | "eat" | "eats" | "dining" | "drinks" | "bar"
        | "bars" => Some(PropertyType::EatAndDrink),
        "attraction" | "attractions" | "sights" | "sightseeing" => Some(PropertyType::Attraction),
        _ => None,
    }
}

/// "150", "$150", "€150", "150€" -> 150
fn parse_amount(token: &str) -> Option<u32> {
    let digits = token.trim_matches(|c: char| !c.is_ascii_digit());
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

struct StarsToken {
    value: u8,
    consumed: usize,
}

/// "4 stars", "4-star", "4+", "4+ stars"
fn rating_token(token: &str, next: Option<&str>) -> Option<StarsToken> {
    let stars_word = |w: &str| matches!(w, "star" | "stars" | "★");

    let parse_stars = |digits: &str| -> Option<u8> {
        let value: u8 = digits.parse().ok()?;
        (1..=5).contains(&value).then_some(value)
    };

    if let Some(digits) = token
        .strip_suffix("-stars")
        .or_else(|| token.strip_suffix("-star"))
    {
        return parse_stars(digits).map(|value| StarsToken { value, consumed: 1 });
    }

    let (digits, plus) = match token.strip_suffix('+') {
        Some(digits) => (digits, true),
        None => (token, false),
    };
    let value = parse_stars(digits)?;

    match next {
        Some(word) if stars_word(word) => Some(StarsToken { value, consumed: 2 }),
        _ if plus => Some(StarsToken { value, consumed: 1 }),
        _ => None,
    }
}

#[cfg(test)]
#[path = "smart_filter_tests.rs"]
mod smart_filter_tests;
