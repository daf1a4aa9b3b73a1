//! plural.rs
//!
//! Picks the word form that goes with a count. Croatian (like most Slavic
//! languages) needs three forms, not two: 2 "godine" but 5 "godina". The
//! rule set is a parameter so the English-style two-form rule is the same
//! code path, not a second implementation.

/// The grammatical variants of a counted noun.
///
/// `many` may be omitted for nouns whose few- and many-forms coincide; both
/// rules then fall back to `few`, so selection never fails.
#[derive(Debug, Clone, Copy)]
pub struct PluralForms {
    pub one: &'static str,
    pub few: &'static str,
    pub many: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// English-style: 1 takes the one-form, everything else the many-form.
    Binary,
    /// Croatian-style, keyed on the last two digits of the count:
    /// 1 → one, last digit 2–4 outside the teens → few, otherwise many.
    Slavic,
}

impl PluralRule {
    /// Returns the form of `forms` that agrees with `count`. Pure and total;
    /// 0 and negative counts take the many-branch.
    pub fn select(self, count: i32, forms: PluralForms) -> &'static str {
        let many = forms.many.unwrap_or(forms.few);
        match self {
            PluralRule::Binary => {
                if count == 1 {
                    forms.one
                } else {
                    many
                }
            }
            PluralRule::Slavic => {
                if count == 1 {
                    forms.one
                } else if (2..=4).contains(&(count % 10))
                    && !(10..20).contains(&(count % 100))
                {
                    forms.few
                } else {
                    many
                }
            }
        }
    }
}
