//! OCR noise cleanup applied before any pattern runs.
//!
//! Two fix tables repair the confusions that show up constantly in scanned
//! datasheets: letter-for-digit swaps inside known vocabulary words
//! (`C0pp3r`, `Insu1ati0n`) and digit-for-letter swaps inside numbers
//! (`1O0`, `4O C`). Arabic-Indic digits are folded to ASCII first so the
//! numeric fixes and the extraction patterns see one digit alphabet.
//!
//! The pass is conservative: every fix is anchored on word boundaries or
//! adjacent digits, so prose that merely resembles a confusable is left
//! alone.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

struct Fix {
    regex: Regex,
    replacement: &'static str,
}

macro_rules! fixes {
    ($(($pattern:expr, $replacement:expr)),+ $(,)?) => {
        vec![
            $(Fix {
                regex: Regex::new($pattern).expect("preprocess fix regex pattern is valid and should compile"),
                replacement: $replacement,
            }),+
        ]
    };
}

/// Vocabulary words rebuilt from their common OCR garblings.
static WORD_FIXES: Lazy<Vec<Fix>> = Lazy::new(|| {
    fixes![
        (r"(?i)\bC[@a]b[l1][e3]\b", "Cable"),
        (r"(?i)\bV[o0][l1]tag[e3]\b", "Voltage"),
        (r"(?i)\bC[uo0]rr[e3]nt\b", "Current"),
        (r"(?i)\bInsu[l1]at[i1][o0]n\b", "Insulation"),
        (r"(?i)\bC[o0]ndu\s?ct[o0]r\b", "Conductor"),
        (r"(?i)\bSh[e3][a@]th\b", "Sheath"),
        (r"(?i)\bArm[o0]u?r\b", "Armor"),
        (r"(?i)\bT[e3]mp[\s.]?[e3]ratur[e3]\b", "Temperature"),
        (r"(?i)\bR[e3]s[i1]stanc[e3]\b", "Resistance"),
        (r"(?i)\bC[o0]pp\s?[e3]r\b", "Copper"),
        (r"(?i)\b[o0]p[e3]rat[i1]ng\b", "Operating"),
        (r"(?i)\bSt[e3][e3][l1]\b", "Steel"),
        (r"(?i)\bW[i1l]r[e3]\b", "Wire"),
        (r"(?i)\bc[o0]r[e3]s?\b", "cores"),
    ]
});

/// Digits rebuilt from letter confusables. Case-sensitive: only uppercase
/// `O` and `S` are plausible digit misreads.
static DIGIT_FIXES: Lazy<Vec<Fix>> = Lazy::new(|| {
    fixes![
        (r"(\d)\s*O\s*(\d)", "${1}0${2}"),
        (r"(\d)\s*S\s*(\d)", "${1}5${2}"),
        (r"(\d)O\b", "${1}0"),
        (r"\bO(\d)", "0${1}"),
        (r"\bS(\d)", "5${1}"),
        (r"(\d)\s+(\d)\s*A\b", "${1}${2} A"),
    ]
});

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex pattern is valid and should compile"));

/// Clean one datasheet's text for extraction.
///
/// Output is single-line with collapsed whitespace; the extraction patterns
/// rely on that.
pub fn preprocess(text: &str) -> String {
    let mut out = fold_digits(text).into_owned();
    for fix in WORD_FIXES.iter() {
        out = fix.regex.replace_all(&out, fix.replacement).into_owned();
    }
    for fix in DIGIT_FIXES.iter() {
        out = fix.regex.replace_all(&out, fix.replacement).into_owned();
    }
    WHITESPACE.replace_all(&out, " ").trim().to_string()
}

/// Fold Arabic-Indic and Extended Arabic-Indic digits to ASCII.
fn fold_digits(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| fold_digit(c).is_some()) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(|c| fold_digit(c).unwrap_or(c)).collect())
}

fn fold_digit(c: char) -> Option<char> {
    let offset = match c {
        '\u{0660}'..='\u{0669}' => c as u32 - 0x0660,
        '\u{06F0}'..='\u{06F9}' => c as u32 - 0x06F0,
        _ => return None,
    };
    char::from_u32('0' as u32 + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_confusables_are_repaired() {
        assert_eq!(preprocess("C0pp3r C@ble"), "Copper Cable");
        assert_eq!(preprocess("Insu1ati0n: XLPE"), "Insulation: XLPE");
        assert_eq!(preprocess("Stee1 Wlre Armor"), "Steel Wire Armor");
    }

    #[test]
    fn test_digit_confusables_are_repaired() {
        assert_eq!(preprocess("1O0 V"), "100 V");
        assert_eq!(preprocess("4O C"), "40 C");
        assert_eq!(preprocess("O5 A"), "05 A");
        assert_eq!(preprocess("2S0 V"), "250 V");
    }

    #[test]
    fn test_spaced_amperes_collapse() {
        assert_eq!(preprocess("rated 3 2 A"), "rated 32 A");
    }

    #[test]
    fn test_prose_is_left_alone() {
        // `O` and `S` inside ordinary words are not digit misreads.
        assert_eq!(preprocess("MOhm.km"), "MOhm.km");
        assert_eq!(preprocess("LSOH sheath"), "LSOH Sheath");
    }

    #[test]
    fn test_arabic_digits_fold_to_ascii() {
        assert_eq!(preprocess("جهد ٤٥٠ فولت"), "جهد 450 فولت");
    }

    #[test]
    fn test_whitespace_collapses_to_single_line() {
        assert_eq!(preprocess("Voltage: 450V\n\nCurrent:  32A\t"), "Voltage: 450V Current: 32A");
    }
}
