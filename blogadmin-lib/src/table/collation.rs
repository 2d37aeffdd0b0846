//! Locale-aware string collation for the sort stage.
//!
//! Strings are compared level by level: base letters first, then accents,
//! then case (lowercase before uppercase). Whitespace and punctuation sort
//! before digits, digits before letters.

use std::cmp::Ordering;

/// Turkish alphabet, with the Latin-only letters q, w and x in their usual
/// places.
const TURKISH_ALPHABET: [char; 32] = [
    'a', 'b', 'c', 'ç', 'd', 'e', 'f', 'g', 'ğ', 'h', 'ı', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'ö',
    'p', 'q', 'r', 's', 'ş', 't', 'u', 'ü', 'v', 'w', 'x', 'y', 'z',
];

/// Collation rules used to order string values.
///
/// The admin panel serves Turkish content, so [`Collation::Turkish`] is the
/// default: `ç ğ ı ö ş ü` are letters of their own, and dotted/dotless `i`
/// fold case the Turkish way (`I` → `ı`, `İ` → `i`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Collation {
    /// Turkish alphabet order.
    #[default]
    Turkish,
    /// Locale-neutral Latin order; diacritics are accent differences only.
    Root,
    /// Plain code point order, case-sensitive.
    Ordinal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Other,
    Digit,
    Letter,
    ForeignLetter,
}

#[derive(Debug, Clone, Copy)]
struct Weight {
    primary: (Class, u32),
    secondary: u8,
    tertiary: u8,
}

impl Collation {
    /// Compares two strings under this collation.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use blogadmin_lib::table::Collation;
    ///
    /// assert_eq!(Collation::Turkish.compare("apple", "Banana"), Ordering::Less);
    /// assert_eq!(Collation::Turkish.compare("çay", "ceviz"), Ordering::Greater);
    /// assert_eq!(Collation::Root.compare("çay", "ceviz"), Ordering::Less);
    /// ```
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        if self == Collation::Ordinal {
            return a.cmp(b);
        }

        let wa: Vec<Weight> = a.chars().map(|c| self.weigh(c)).collect();
        let wb: Vec<Weight> = b.chars().map(|c| self.weigh(c)).collect();

        wa.iter()
            .map(|w| w.primary)
            .cmp(wb.iter().map(|w| w.primary))
            .then_with(|| wa.iter().map(|w| w.secondary).cmp(wb.iter().map(|w| w.secondary)))
            .then_with(|| wa.iter().map(|w| w.tertiary).cmp(wb.iter().map(|w| w.tertiary)))
    }

    /// Lowercases a single character under this collation's case rules.
    fn lower(self, c: char) -> char {
        match (self, c) {
            (Collation::Turkish, 'I') => 'ı',
            (_, 'İ') => 'i',
            _ => c.to_lowercase().next().unwrap_or(c),
        }
    }

    fn weigh(self, c: char) -> Weight {
        let tertiary = u8::from(c.is_uppercase());
        let lower = self.lower(c);

        let (base, secondary) = match self {
            Collation::Turkish if TURKISH_ALPHABET.contains(&lower) => (lower, 0),
            _ => match strip_accent(lower) {
                Some(base) => (base, 1),
                None => (lower, 0),
            },
        };

        let primary = if let Some(rank) = self.letter_rank(base) {
            (Class::Letter, rank)
        } else if let Some(digit) = base.to_digit(10) {
            (Class::Digit, digit)
        } else if base.is_alphabetic() {
            (Class::ForeignLetter, base as u32)
        } else if base.is_numeric() {
            (Class::Digit, 10 + base as u32)
        } else {
            (Class::Other, base as u32)
        };

        Weight {
            primary,
            secondary,
            tertiary,
        }
    }

    fn letter_rank(self, c: char) -> Option<u32> {
        match self {
            Collation::Turkish => TURKISH_ALPHABET
                .iter()
                .position(|&l| l == c)
                .map(|i| i as u32),
            _ => c.is_ascii_lowercase().then(|| c as u32 - 'a' as u32),
        }
    }
}

/// Maps a lowercase accented Latin letter to its base letter.
fn strip_accent(c: char) -> Option<char> {
    let base = match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'é' | 'è' | 'ê' | 'ë' | 'ē' => 'e',
        'ğ' => 'g',
        'í' | 'ì' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' => 'n',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ō' => 'o',
        'ş' | 'š' => 's',
        'ú' | 'ù' | 'û' | 'ü' | 'ū' => 'u',
        'ý' | 'ÿ' => 'y',
        'ž' => 'z',
        _ => return None,
    };
    Some(base)
}
