//! Friend records and the text shown for their running balance.

use std::fmt;

// ───────────────────────────────────────── identifiers ───────

/// Opaque friend identifier.
///
/// Seed friends carry short numeric ids, generated friends carry UUIDs; both
/// are compared purely as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FriendId(String);

impl FriendId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ───────────────────────────────────────── friend ────────────

/// A party the user shares expenses with.
#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    /// Avatar URL. Never fetched, only displayed.
    pub image: String,
    /// Positive: the friend owes the user. Negative: the user owes the friend.
    pub balance: f64,
}

impl Friend {
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>, balance: f64) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance,
        }
    }

    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::of(self.balance)
    }

    /// The one-line balance sentence shown under the friend's name.
    pub fn status_line(&self) -> String {
        match self.status() {
            BalanceStatus::YouOwe(amount) => {
                format!("you owe {} ${}", self.name, format_amount(amount))
            }
            BalanceStatus::OwesYou(amount) => {
                format!("{} owes you ${}", self.name, format_amount(amount))
            }
            BalanceStatus::Even => format!("You and {} are even", self.name),
        }
    }
}

// ───────────────────────────────────────── balance status ────

/// Who owes whom, with the absolute amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceStatus {
    YouOwe(f64),
    OwesYou(f64),
    Even,
}

impl BalanceStatus {
    pub fn of(balance: f64) -> Self {
        if balance < 0.0 {
            Self::YouOwe(balance.abs())
        } else if balance > 0.0 {
            Self::OwesYou(balance)
        } else {
            Self::Even
        }
    }
}

/// Render a number the way a plain numeric text field would: `7`, `2.5`.
pub fn format_amount(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend(balance: f64) -> Friend {
        Friend::new(FriendId::new("1"), "Sarah", "https://i.pravatar.cc/48", balance)
    }

    #[test]
    fn negative_balance_means_user_owes() {
        assert_eq!(friend(-7.0).status(), BalanceStatus::YouOwe(7.0));
        assert_eq!(friend(-7.0).status_line(), "you owe Sarah $7");
    }

    #[test]
    fn positive_balance_means_friend_owes() {
        assert_eq!(friend(20.0).status_line(), "Sarah owes you $20");
    }

    #[test]
    fn zero_balance_is_even() {
        assert_eq!(friend(0.0).status(), BalanceStatus::Even);
        assert_eq!(friend(0.0).status_line(), "You and Sarah are even");
    }

    #[test]
    fn fractional_amounts_keep_their_decimals() {
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(40.0), "40");
    }

    #[test]
    fn huge_whole_amounts_print_in_full() {
        assert_eq!(format_amount(1e20), "100000000000000000000");
        assert_eq!(friend(1e20).status_line(), "Sarah owes you $100000000000000000000");
    }
}
