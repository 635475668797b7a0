use std::sync::LazyLock;

use regex::Regex;

use crate::domain::recommendation::entities::{Recommendation, Section};

/// `Label:` at the end of a line, then everything up to the next `Word:` line
/// or the end of the text.
static SECTION_REGEXES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    Section::ALL.map(|section| {
        Regex::new(&format!(
            r"(?ims){}:[ \t]*\r?\n(.*?)(?:^\p{{L}}\w*:|\z)",
            regex::escape(section.label())
        ))
        .expect("Invalid section regex")
    })
});

/// Leading enumeration token: `1.`, `2)`, `3:`, `4 -`, or a bullet.
static ENUMERATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\d+[.):](?:\s|$)|\d+\s+-\s|[*•]|-\s)\s*").expect("Invalid enumeration regex")
});

fn section_regex(section: Section) -> &'static Regex {
    let index = Section::ALL
        .iter()
        .position(|s| *s == section)
        .unwrap_or_default();
    &SECTION_REGEXES[index]
}

fn strip_enumeration(line: &str) -> &str {
    match ENUMERATION_REGEX.find(line) {
        Some(token) => line[token.end()..].trim(),
        None => line.trim(),
    }
}

/// Items listed under `section` in free-form model output.
///
/// Returns an empty list when the header is missing. Headers the model
/// paraphrased or renamed are not recognised.
pub fn extract_section(text: &str, section: Section) -> Vec<String> {
    let Some(block) = section_regex(section)
        .captures(text)
        .and_then(|caps| caps.get(1))
    else {
        return Vec::new();
    };

    block
        .as_str()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(strip_enumeration)
        .filter(|item| !item.is_empty())
        .take(section.max_items())
        .map(str::to_string)
        .collect()
}

pub fn extract_recommendation(text: &str, region: &str) -> Recommendation {
    Recommendation {
        restaurant_names: extract_section(text, Section::Restaurants),
        breakfast_names: extract_section(text, Section::Breakfast),
        dinner_names: extract_section(text, Section::Dinner),
        workout_names: extract_section(text, Section::Workouts),
        region: region.to_string(),
    }
}
