//! Locale-aware string ordering for display names and colors.
//!
//! Strings are compared in three levels, like a root-locale collator:
//!
//! 1. base letters, ignoring case and accents ("Šolar" sorts with "solar")
//! 2. accents, unaccented first ("e" < "é")
//! 3. case, lowercase first ("a" < "A")
//!
//! Remaining ties fall back to code point order so the result is total.
//! Accents are found by canonical decomposition (NFD).

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two strings the way a catalog reader expects them ordered.
pub fn collate(a: &str, b: &str) -> Ordering {
    let a_key = elements(a);
    let b_key = elements(b);

    let bases = |key: &Vec<Element>| key.iter().map(|e| e.base).collect::<Vec<_>>();
    bases(&a_key)
        .cmp(&bases(&b_key))
        .then_with(|| {
            let marks = |e: &Element| e.marks.clone();
            a_key.iter().map(marks).cmp(b_key.iter().map(marks))
        })
        .then_with(|| {
            let upper = |e: &Element| e.upper;
            a_key.iter().map(upper).cmp(b_key.iter().map(upper))
        })
        .then_with(|| a.cmp(b))
}

/// Lowercase folding used for case-insensitive matching.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// One collation element: a lowercase base letter, the accents on it and
/// whether it was written in uppercase.
#[derive(Debug)]
struct Element {
    base: char,
    marks: Vec<char>,
    upper: bool,
}

fn elements(s: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::with_capacity(s.len());
    for c in s.nfd() {
        if is_combining_mark(c) {
            match out.last_mut() {
                Some(last) => last.marks.push(c),
                None => out.push(Element {
                    base: c,
                    marks: Vec::new(),
                    upper: false,
                }),
            }
            continue;
        }

        let upper = c.is_uppercase();
        for lower in c.to_lowercase() {
            match expand(lower) {
                Some((bases, mark)) => {
                    for &base in bases {
                        out.push(Element {
                            base,
                            marks: mark.into_iter().collect(),
                            upper,
                        });
                    }
                }
                None => out.push(Element {
                    base: lower,
                    marks: Vec::new(),
                    upper,
                }),
            }
        }
    }
    out
}

/// Letters that carry an accent but have no canonical decomposition.
/// Returns their base letters and a stand-in mark for the accent level.
fn expand(c: char) -> Option<(&'static [char], Option<char>)> {
    const STROKE: char = '\u{0335}';
    let expanded: (&'static [char], Option<char>) = match c {
        'ł' => (&['l'], Some(STROKE)),
        'ø' => (&['o'], Some('\u{0338}')),
        'đ' => (&['d'], Some(STROKE)),
        'ħ' => (&['h'], Some(STROKE)),
        'ı' => (&['i'], Some('\u{0307}')),
        'ß' => (&['s', 's'], None),
        'æ' => (&['a', 'e'], None),
        'œ' => (&['o', 'e'], None),
        _ => return None,
    };
    Some(expanded)
}
