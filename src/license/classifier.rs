/// Phrases that identify a license family.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Signature {
    Mpl,
    Lgpl,
    Agpl,
    Gpl,
    Apache,
    Cddl,
    Epl,
    Unlicense,
    Mit,
    Bsd,
    Isc,
}

const SIGNATURES: &[(&str, Signature)] = &[
    ("mozilla public license", Signature::Mpl),
    ("gnu lesser general public license", Signature::Lgpl),
    ("gnu library general public license", Signature::Lgpl),
    ("gnu affero general public license", Signature::Agpl),
    ("gnu general public license", Signature::Gpl),
    ("apache license", Signature::Apache),
    ("common development and distribution license", Signature::Cddl),
    ("eclipse public license", Signature::Epl),
    (
        "this is free and unencumbered software released into the public domain",
        Signature::Unlicense,
    ),
    ("permission is hereby granted, free of charge", Signature::Mit),
    ("redistribution and use in source and binary forms", Signature::Bsd),
    (
        "permission to use, copy, modify, and/or distribute this software for any purpose",
        Signature::Isc,
    ),
    (
        "permission to use, copy, modify, and distribute this software for any purpose",
        Signature::Isc,
    ),
];

/// Characters after a license title searched for its version.
const VERSION_WINDOW: usize = 100;

/// Guess the license identifier of a license file's text.
///
/// Matching is case-insensitive and ignores line wrapping. License texts
/// mention other licenses (dual licensing notes, the MPL's "Secondary
/// Licenses", the GPL pointing at the LGPL), so the signature phrase appearing
/// earliest decides the family.
pub fn classify_text(text: &str) -> Option<&'static str> {
    let t = normalize(text);

    let (pos, phrase, signature) = SIGNATURES
        .iter()
        .filter_map(|(phrase, sig)| t.find(phrase).map(|pos| (pos, *phrase, *sig)))
        .min_by_key(|(pos, _, _)| *pos)?;
    let version = version_after(&t[pos + phrase.len()..]);

    match signature {
        Signature::Mpl => (version.as_deref() == Some("2.0")).then_some("MPL-2.0"),
        Signature::Apache => (version.as_deref() == Some("2.0")).then_some("Apache-2.0"),
        Signature::Agpl => Some("AGPL-3.0"),
        Signature::Gpl => match version.as_deref() {
            Some("3") | Some("3.0") => Some("GPL-3.0"),
            Some("2") | Some("2.0") => Some("GPL-2.0"),
            _ => None,
        },
        Signature::Lgpl => match version.as_deref() {
            Some("3") | Some("3.0") => Some("LGPL-3.0"),
            Some("2.1") => Some("LGPL-2.1"),
            _ => None,
        },
        Signature::Cddl => Some("CDDL-1.0"),
        Signature::Epl => Some("EPL-1.0"),
        Signature::Unlicense => Some("Unlicense"),
        Signature::Mit => Some("MIT"),
        Signature::Bsd => {
            if t.contains("neither the name") || t.contains("names of its contributors") {
                Some("NewBSD")
            } else {
                Some("FreeBSD")
            }
        }
        Signature::Isc => Some("ISC"),
    }
}

/// The number following the first "version" close after a license title.
fn version_after(rest: &str) -> Option<String> {
    let window: String = rest.chars().take(VERSION_WINDOW).collect();
    let start = window.find("version ")? + "version ".len();
    let number: String = window[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let number = number.trim_end_matches('.');
    (!number.is_empty()).then(|| number.to_string())
}

/// Lowercase and collapse all whitespace runs into single spaces.
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
