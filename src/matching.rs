//! Name normalization and fuzzy matching against reference lists
//!
//! Similarity is the normalized Levenshtein score `1 - distance / max_len`
//! over lowercased characters, so 1.0 is an exact (case-insensitive) match
//! and 0.0 shares nothing. Two cutoffs are used:
//! - [`NORMALIZE_CUTOFF`] (0.6) for general form input
//! - [`SMART_MATCH_CUTOFF`] (0.3) for market filters, where a loose guess beats no filter

/// Cutoff for [`normalize_input`]
pub const NORMALIZE_CUTOFF: f64 = 0.6;

/// Cutoff for [`smart_match`]
pub const SMART_MATCH_CUTOFF: f64 = 0.3;

/// States accepted by the commodity price filters
pub const VALID_STATES: &[&str] = &[
    "Andaman and Nicobar",
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chandigarh",
    "Chattisgarh",
    "Dadra and Nagar Haveli",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jammu and Kashmir",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Puducherry",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

/// Commodities accepted by the commodity price filters
pub const VALID_COMMODITIES: &[&str] = &[
    "Wheat",
    "Rice",
    "Potato",
    "Onion",
    "Bhindi",
    "Tomato",
    "Cotton",
    "Mustard",
    "Maize",
    "Soyabean",
    "Gram",
    "Jowar",
    "Bajra",
    "Arhar (Tur)",
    "Moong",
    "Masur",
    "Groundnut",
    "Sunflower",
    "Apple",
    "Banana",
    "Mango",
    "Lemon",
    "Sugarcane",
    "Paddy",
];

/// Capitalize the first letter of every alphabetic run and lowercase the rest.
///
/// `"new delhi"` becomes `"New Delhi"`, `"arhar (tur)"` becomes `"Arhar (Tur)"`.
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Levenshtein edit distance over chars
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Case-insensitive similarity in `[0.0, 1.0]`
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - edit_distance(&a, &b) as f64 / longest as f64
}

/// Best reference entry scoring at least `cutoff`. Ties keep the earlier entry.
#[must_use]
pub fn closest_match<'a>(value: &str, references: &[&'a str], cutoff: f64) -> Option<&'a str> {
    let mut best: Option<(&'a str, f64)> = None;
    for &candidate in references {
        let score = similarity(value, candidate);
        if score < cutoff {
            continue;
        }
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }
    best.map(|(candidate, _)| candidate)
}

fn match_with_cutoff(value: Option<&str>, references: &[&str], cutoff: f64) -> Option<String> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;
    let value = title_case(value);
    Some(
        closest_match(&value, references, cutoff)
            .map_or(value, str::to_string),
    )
}

/// Title-case the input and snap it to a reference entry when one is close enough.
///
/// Returns `None` for missing or blank input, and the title-cased input when no
/// reference clears [`NORMALIZE_CUTOFF`]. Without references only the casing changes.
#[must_use]
pub fn normalize_input(value: Option<&str>, references: Option<&[&str]>) -> Option<String> {
    match references {
        Some(references) => match_with_cutoff(value, references, NORMALIZE_CUTOFF),
        None => value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(title_case),
    }
}

/// Looser variant of [`normalize_input`] using [`SMART_MATCH_CUTOFF`]
#[must_use]
pub fn smart_match(value: Option<&str>, references: &[&str]) -> Option<String> {
    match_with_cutoff(value, references, SMART_MATCH_CUTOFF)
}
