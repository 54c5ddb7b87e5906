//! Numeral and text localization for rendered output.
//!
//! Documents print with Eastern-Arabic (Hindi) numerals. The paginator
//! passes all text through verbatim; these transforms run at draw time only,
//! so every renderer applies them identically.
//!
//! One deliberate quirk carried from the existing documents: currency values
//! keep a Western `.` decimal point instead of the Arabic decimal separator,
//! because that is how the company's printed quotes have always looked.

/// Currency suffix for Egyptian pounds.
const CURRENCY_SUFFIX: &str = "ج.م.";

/// Arabic thousands separator (U+066C).
const THOUSANDS_SEPARATOR: char = '\u{066C}';

/// Maps a Western digit to its Eastern-Arabic glyph; other chars pass through.
fn eastern_digit(c: char) -> char {
    match c {
        '0' => '٠',
        '1' => '١',
        '2' => '٢',
        '3' => '٣',
        '4' => '٤',
        '5' => '٥',
        '6' => '٦',
        '7' => '٧',
        '8' => '٨',
        '9' => '٩',
        other => other,
    }
}

/// Converts every Western digit in `text` to its Eastern-Arabic glyph.
pub fn to_eastern_digits(text: &str) -> String {
    text.chars().map(eastern_digit).collect()
}

/// Formats an amount as Egyptian-pound currency with Eastern-Arabic digits,
/// Arabic thousands grouping, two decimals, and a Western decimal point.
///
/// `1234.5` → `١٬٢٣٤.٥٠ ج.م.`
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), "00"),
    };

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(eastern_digit(*c));
    }

    let sign = if negative { "-" } else { "" };
    format!(
        "{sign}{grouped}.{} {CURRENCY_SUFFIX}",
        to_eastern_digits(frac_part)
    )
}

/// Formats a plain number with Eastern-Arabic digits and no grouping.
///
/// Whole numbers drop the fraction (`2.0` → `٢`); fractional values keep up
/// to two decimals with trailing zeros trimmed (`2.50` → `٢.٥`).
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return to_eastern_digits(&format!("{}", value as i64));
    }
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    to_eastern_digits(trimmed)
}

/// True for characters that belong to a number run for spacing purposes:
/// Eastern-Arabic digits plus the punctuation that commonly rides with them.
fn is_numeric_run_char(c: char) -> bool {
    ('\u{0660}'..='\u{0669}').contains(&c) || matches!(c, '.' | ',' | '%' | '—' | '-')
}

fn is_eastern_digit(c: char) -> bool {
    ('\u{0660}'..='\u{0669}').contains(&c)
}

/// Converts digits in free text to Eastern-Arabic glyphs and normalizes
/// spacing around embedded numbers: a digit run glued to a letter on either
/// side gets a single separating space (`قيمة14%` → `قيمة ١٤%`).
pub fn localize_text(text: &str) -> String {
    let converted = to_eastern_digits(text);
    let mut out = String::with_capacity(converted.len() + 8);
    let mut prev: Option<char> = None;

    for c in converted.chars() {
        if let Some(p) = prev {
            let leaving_run = is_numeric_run_char(p) && !is_numeric_run_char(c);
            let entering_run = is_eastern_digit(c) && !is_numeric_run_char(p);
            if (leaving_run || entering_run) && !p.is_whitespace() && !c.is_whitespace() {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
