// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Access control for ticket releases.
//!
//! A release is either open to everyone or reserved behind a promo code.
//! The reserved case always carries a well-formed code, so a reserved release
//! without a code cannot be represented.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Minimum promo code length in characters.
pub const PROMO_CODE_MIN_LEN: usize = 5;
/// Maximum promo code length in characters.
pub const PROMO_CODE_MAX_LEN: usize = 20;

pub(crate) const PROMO_CODE_PATTERN_MESSAGE: &str =
    "Promo Code must only consist of capital letters and numbers";
pub(crate) const PROMO_CODE_TOO_SHORT_MESSAGE: &str = "Promo Code must be at least 5 characters";
pub(crate) const PROMO_CODE_TOO_LONG_MESSAGE: &str = "Promo Code must be at most 20 characters";

/// Returns the first promo code rule that `code` breaks, if any.
///
/// Rules are checked in order: character set, minimum length, maximum length.
/// Emptiness is the caller's concern since the "required" message differs per form.
pub(crate) fn promo_code_problem(code: &str) -> Option<&'static str> {
    if !code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Some(PROMO_CODE_PATTERN_MESSAGE);
    }

    // Safe to count bytes: the character set is ASCII only at this point.
    let len: usize = code.len();
    if len < PROMO_CODE_MIN_LEN {
        return Some(PROMO_CODE_TOO_SHORT_MESSAGE);
    }
    if len > PROMO_CODE_MAX_LEN {
        return Some(PROMO_CODE_TOO_LONG_MESSAGE);
    }
    None
}

/// A well-formed promo code: `^[A-Z0-9]{5,20}$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PromoCode {
    value: String,
}

impl PromoCode {
    /// Creates a new `PromoCode`.
    ///
    /// The code is taken as-is; lowercase input is rejected rather than normalized
    /// because the code is a shared secret typed by end users.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPromoCode` if the code is empty, contains
    /// anything other than capital letters and digits, or is not 5-20 characters long.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.is_empty() {
            return Err(DomainError::InvalidPromoCode {
                reason: "Promo Code is required",
            });
        }
        if let Some(reason) = promo_code_problem(value) {
            return Err(DomainError::InvalidPromoCode { reason });
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the code.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for PromoCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PromoCode> for String {
    fn from(code: PromoCode) -> Self {
        code.value
    }
}

impl std::fmt::Display for PromoCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Who may file ticket requests against a release.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReleaseAccessPolicy {
    /// Anyone may request tickets.
    #[default]
    Open,
    /// Only users presenting the promo code may request tickets.
    Reserved {
        /// The code that unlocks the release.
        promo_code: PromoCode,
    },
}

impl ReleaseAccessPolicy {
    /// Returns whether the release is reserved.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(self, Self::Reserved { .. })
    }

    /// Returns the promo code of a reserved release.
    #[must_use]
    pub const fn promo_code(&self) -> Option<&PromoCode> {
        match self {
            Self::Open => None,
            Self::Reserved { promo_code } => Some(promo_code),
        }
    }

    /// Returns whether a user presenting `code` may access the release.
    ///
    /// Open releases admit everyone. Reserved releases require an exact match.
    #[must_use]
    pub fn admits(&self, code: Option<&str>) -> bool {
        match self {
            Self::Open => true,
            Self::Reserved { promo_code } => code == Some(promo_code.value()),
        }
    }
}
