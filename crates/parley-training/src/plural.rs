//! Russian cardinal-number agreement for counted nouns.
//!
//! Russian picks one of three noun forms after a number:
//! `1 аудиозапись`, `2 аудиозаписи`, `5 аудиозаписей`. The choice depends
//! only on the last one or two digits, so [`PluralForms`] works for any
//! noun given its three forms.

/// Agreement class of a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    /// Ends in 1, but not 11.
    One,
    /// Ends in 2-4, but not 12-14.
    Few,
    /// Everything else.
    Many,
}

impl PluralCategory {
    pub fn of(n: u64) -> Self {
        let mod10 = n % 10;
        let mod100 = n % 100;
        if mod10 == 1 && mod100 != 11 {
            Self::One
        } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
            Self::Few
        } else {
            Self::Many
        }
    }
}

/// The three inflections of one noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralForms<'a> {
    pub one: &'a str,
    pub few: &'a str,
    pub many: &'a str,
}

/// "audio recording".
pub const RECORDING_FORMS: PluralForms<'static> = PluralForms {
    one: "аудиозапись",
    few: "аудиозаписи",
    many: "аудиозаписей",
};

impl<'a> PluralForms<'a> {
    pub const fn new(one: &'a str, few: &'a str, many: &'a str) -> Self {
        Self { one, few, many }
    }

    /// Returns the noun form agreeing with `n`.
    pub fn select(&self, n: u64) -> &'a str {
        match PluralCategory::of(n) {
            PluralCategory::One => self.one,
            PluralCategory::Few => self.few,
            PluralCategory::Many => self.many,
        }
    }
}

/// Formats `n` followed by the agreeing noun form, e.g. `3 аудиозаписи`.
pub fn format_count(n: u64, forms: &PluralForms<'_>) -> String {
    format!("{n} {}", forms.select(n))
}
