//! Subdivision display-name normalization
//!
//! Homepass files arrive with inconsistent naming: some carry a
//! `kelurahan <name>` marker, others prefix the group or the word
//! "homepass" onto the subdivision name. The normalizer extracts the bare
//! subdivision name and title-cases it for display. This is presentation
//! text handling for the input adapter, not part of the allocation core.

/// Derives the canonical display name of a subdivision from a file stem.
///
/// The text after a case-insensitive `kelurahan ` marker wins when present;
/// otherwise one known prefix form (group-qualified or generic) is stripped.
/// The result is title-cased.
pub fn display_name(file_stem: &str, group_name: &str) -> String {
    let base = file_stem.trim();
    if let Some(rest) = after_marker(base) {
        return title_case(rest.trim());
    }

    let lowered = base.to_lowercase();
    let group = group_name.to_lowercase();
    let prefixes = [
        format!("homepass kecamatan {group} kelurahan "),
        format!("homepass kecamatan {group} "),
        format!("{group}_"),
        format!("kecamatan {group} "),
        "kelurahan_".to_string(),
        "homepass kelurahan ".to_string(),
        "homepass ".to_string(),
    ];

    let mut name = lowered.as_str();
    for prefix in &prefixes {
        if let Some(stripped) = lowered.strip_prefix(prefix.as_str()) {
            let stripped = stripped.trim();
            if !stripped.is_empty() {
                name = stripped;
            }
            break;
        }
    }
    title_case(name)
}

/// Text after the first `kelurahan` word followed by whitespace, lowercased.
fn after_marker(base: &str) -> Option<String> {
    let lower = base.to_lowercase();
    let position = lower.find("kelurahan")?;
    let rest = &lower[position + "kelurahan".len()..];
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() || trimmed.is_empty() {
        // no whitespace after the marker, or nothing follows it
        return None;
    }
    Some(trimmed.to_string())
}

/// Title case over alphabetic runs: first letter upper, rest lower, any
/// non-alphabetic character starts a new run.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
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
