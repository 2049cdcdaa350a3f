//! Draft state behind the "split a bill" form and the delta it produces.
//!
//! Numeric fields keep the raw text the user typed next to its coerced
//! value. Coercion never fails loudly: anything that doesn't read as a number
//! becomes [`NumericField::Unset`], which counts as "no value" for the submit
//! guard.

use thiserror::Error;

// ───────────────────────────────────────── numeric field ─────

/// A numeric form value with an explicit "nothing entered" state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NumericField {
    #[default]
    Unset,
    Value(f64),
}

impl NumericField {
    /// Coerce typed text. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::Unset;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if !v.is_nan() => Self::Value(v),
            _ => Self::Unset,
        }
    }

    /// A present, non-zero number.
    pub fn is_truthy(self) -> bool {
        matches!(self, Self::Value(v) if v != 0.0)
    }

    /// The value for arithmetic, with `Unset` standing in as zero.
    pub fn or_zero(self) -> f64 {
        match self {
            Self::Unset => 0.0,
            Self::Value(v) => v,
        }
    }
}

/// Text buffer plus its coerced value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericInput {
    text: String,
    value: NumericField,
}

impl NumericInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> NumericField {
        self.value
    }

    fn set(&mut self, text: String, value: NumericField) {
        self.text = text;
        self.value = value;
    }
}

// ───────────────────────────────────────── payer ─────────────

/// Who pays the bill up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payer {
    User,
    Friend,
}

/// Which input of the split form is focused. The friend's share is derived
/// and never focusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitField {
    #[default]
    Bill,
    PaidByUser,
    Payer,
}

impl SplitField {
    pub fn next(self) -> Self {
        match self {
            Self::Bill => Self::PaidByUser,
            Self::PaidByUser => Self::Payer,
            Self::Payer => Self::Bill,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Bill => Self::Payer,
            Self::PaidByUser => Self::Bill,
            Self::Payer => Self::PaidByUser,
        }
    }
}

// ───────────────────────────────────────── errors ────────────

/// An edit the form refused to take. The previous value stays in place.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputRejected {
    #[error("your expense {attempted} exceeds the bill {bill}")]
    ExceedsBill { attempted: f64, bill: f64 },
}

// ───────────────────────────────────────── draft ─────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplitDraft {
    bill: NumericInput,
    paid_by_user: NumericInput,
    payer: Option<Payer>,
}

impl SplitDraft {
    pub fn bill(&self) -> &NumericInput {
        &self.bill
    }

    pub fn paid_by_user(&self) -> &NumericInput {
        &self.paid_by_user
    }

    pub fn payer(&self) -> Option<Payer> {
        self.payer
    }

    pub fn set_bill(&mut self, text: impl Into<String>) {
        let text = text.into();
        let value = NumericField::parse(&text);
        self.bill.set(text, value);
    }

    /// Replace the user's share, refusing any amount above the bill.
    ///
    /// An unset bill compares as zero, so no positive share is accepted
    /// before a bill has been entered.
    pub fn set_paid_by_user(&mut self, text: impl Into<String>) -> Result<(), InputRejected> {
        let text = text.into();
        let value = NumericField::parse(&text);
        let attempted = value.or_zero();
        let bill = self.bill.value().or_zero();
        if attempted > bill {
            return Err(InputRejected::ExceedsBill { attempted, bill });
        }
        self.paid_by_user.set(text, value);
        Ok(())
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = Some(payer);
    }

    /// Step through the payer options; starts at the user.
    pub fn cycle_payer(&mut self) {
        self.payer = Some(match self.payer {
            Some(Payer::User) => Payer::Friend,
            Some(Payer::Friend) | None => Payer::User,
        });
    }

    /// Type one character into a text field.
    pub fn push_char(&mut self, field: SplitField, c: char) -> Result<(), InputRejected> {
        match field {
            SplitField::Bill => {
                let mut text = self.bill.text.clone();
                text.push(c);
                self.set_bill(text);
                Ok(())
            }
            SplitField::PaidByUser => {
                let mut text = self.paid_by_user.text.clone();
                text.push(c);
                self.set_paid_by_user(text)
            }
            SplitField::Payer => Ok(()),
        }
    }

    /// Delete the last character of a text field.
    pub fn pop_char(&mut self, field: SplitField) -> Result<(), InputRejected> {
        match field {
            SplitField::Bill => {
                let mut text = self.bill.text.clone();
                text.pop();
                self.set_bill(text);
                Ok(())
            }
            SplitField::PaidByUser => {
                let mut text = self.paid_by_user.text.clone();
                text.pop();
                self.set_paid_by_user(text)
            }
            SplitField::Payer => Ok(()),
        }
    }

    /// The friend's share of the bill, shown read-only. `None` until a bill
    /// is entered.
    pub fn paid_by_friend(&self) -> Option<f64> {
        if self.bill.value().is_truthy() {
            Some(self.bill.value().or_zero() - self.paid_by_user.value().or_zero())
        } else {
            None
        }
    }

    /// The signed balance adjustment for the selected friend, or `None`
    /// when the bill or the user's share is missing.
    ///
    /// When the user pays, the friend's share is added to their balance.
    /// Otherwise (friend pays, or no payer picked) the user's share is
    /// subtracted.
    pub fn submit(&self) -> Option<f64> {
        if !self.bill.value().is_truthy() || !self.paid_by_user.value().is_truthy() {
            tracing::debug!(
                bill = ?self.bill.value(),
                paid_by_user = ?self.paid_by_user.value(),
                "split dropped: missing amount"
            );
            return None;
        }

        let delta = match self.payer {
            Some(Payer::User) => self.paid_by_friend().unwrap_or_default(),
            Some(Payer::Friend) | None => -self.paid_by_user.value().or_zero(),
        };
        Some(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(bill: &str, paid: &str, payer: Option<Payer>) -> SplitDraft {
        let mut d = SplitDraft::default();
        d.set_bill(bill);
        d.set_paid_by_user(paid).unwrap();
        if let Some(p) = payer {
            d.set_payer(p);
        }
        d
    }

    #[test]
    fn parse_coerces_silently() {
        assert_eq!(NumericField::parse(""), NumericField::Unset);
        assert_eq!(NumericField::parse("abc"), NumericField::Unset);
        assert_eq!(NumericField::parse(" 12.5 "), NumericField::Value(12.5));
        assert!(!NumericField::parse("0").is_truthy());
    }

    #[test]
    fn user_paying_adds_friend_share() {
        assert_eq!(draft("100", "40", Some(Payer::User)).submit(), Some(60.0));
    }

    #[test]
    fn friend_paying_subtracts_user_share() {
        assert_eq!(draft("100", "40", Some(Payer::Friend)).submit(), Some(-40.0));
    }

    #[test]
    fn no_payer_falls_into_friend_branch() {
        assert_eq!(draft("100", "40", None).submit(), Some(-40.0));
    }

    #[test]
    fn missing_amounts_block_submit() {
        assert_eq!(draft("", "", Some(Payer::User)).submit(), None);
        assert_eq!(draft("100", "", Some(Payer::User)).submit(), None);
        assert_eq!(draft("100", "0", Some(Payer::User)).submit(), None);
    }

    #[test]
    fn share_above_bill_is_rejected() {
        let mut d = draft("100", "40", None);
        let err = d.set_paid_by_user("150").unwrap_err();
        assert_eq!(
            err,
            InputRejected::ExceedsBill {
                attempted: 150.0,
                bill: 100.0
            }
        );
        assert_eq!(d.paid_by_user().text(), "40");
        assert_eq!(d.paid_by_user().value(), NumericField::Value(40.0));
    }

    #[test]
    fn keystroke_that_overflows_is_dropped() {
        let mut d = SplitDraft::default();
        for c in "100".chars() {
            d.push_char(SplitField::Bill, c).unwrap();
        }
        d.push_char(SplitField::PaidByUser, '9').unwrap();
        d.push_char(SplitField::PaidByUser, '9').unwrap();
        assert!(d.push_char(SplitField::PaidByUser, '9').is_err());
        assert_eq!(d.paid_by_user().text(), "99");
    }

    #[test]
    fn share_without_bill_is_rejected() {
        let mut d = SplitDraft::default();
        assert!(d.set_paid_by_user("5").is_err());
        assert_eq!(d.paid_by_user().value(), NumericField::Unset);
    }

    #[test]
    fn friend_share_is_derived() {
        let mut d = SplitDraft::default();
        assert_eq!(d.paid_by_friend(), None);
        d.set_bill("80");
        assert_eq!(d.paid_by_friend(), Some(80.0));
        d.set_paid_by_user("30").unwrap();
        assert_eq!(d.paid_by_friend(), Some(50.0));
    }

    #[test]
    fn lowering_the_bill_keeps_the_share() {
        let mut d = draft("100", "40", Some(Payer::User));
        d.set_bill("30");
        assert_eq!(d.paid_by_friend(), Some(-10.0));
    }

    #[test]
    fn payer_cycles_between_both_parties() {
        let mut d = SplitDraft::default();
        d.cycle_payer();
        assert_eq!(d.payer(), Some(Payer::User));
        d.cycle_payer();
        assert_eq!(d.payer(), Some(Payer::Friend));
        d.cycle_payer();
        assert_eq!(d.payer(), Some(Payer::User));
    }
}
