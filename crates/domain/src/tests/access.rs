// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_release_form;
use crate::{DomainError, PromoCode, ReleaseAccessPolicy};

#[test]
fn test_promo_code_accepts_capitals_and_digits() {
    let code = PromoCode::new("VIP2026").unwrap();
    assert_eq!(code.value(), "VIP2026");
}

#[test]
fn test_promo_code_is_not_normalized() {
    assert_eq!(
        PromoCode::new("vip2026"),
        Err(DomainError::InvalidPromoCode {
            reason: "Promo Code must only consist of capital letters and numbers"
        })
    );
}

#[test]
fn test_promo_code_rejects_empty() {
    assert!(matches!(
        PromoCode::new(""),
        Err(DomainError::InvalidPromoCode { .. })
    ));
}

#[test]
fn test_promo_code_deserialization_validates() {
    let ok: PromoCode = serde_json::from_str("\"ABCDE\"").unwrap();
    assert_eq!(ok.value(), "ABCDE");

    let bad: Result<PromoCode, _> = serde_json::from_str("\"AB\"");
    assert!(bad.is_err());
}

#[test]
fn test_access_policy_from_form() {
    let mut form = create_test_release_form();
    assert_eq!(form.access_policy(), Ok(ReleaseAccessPolicy::Open));

    form.is_reserved = true;
    form.promo_code = Some(String::from("ABC12"));
    assert_eq!(
        form.access_policy(),
        Ok(ReleaseAccessPolicy::Reserved {
            promo_code: PromoCode::new("ABC12").unwrap()
        })
    );

    form.promo_code = None;
    assert!(form.access_policy().is_err());
}

#[test]
fn test_access_policy_admits() {
    let open = ReleaseAccessPolicy::Open;
    assert!(open.admits(None));
    assert!(!open.is_reserved());

    let reserved = ReleaseAccessPolicy::Reserved {
        promo_code: PromoCode::new("ABC12").unwrap(),
    };
    assert!(reserved.is_reserved());
    assert!(reserved.admits(Some("ABC12")));
    assert!(!reserved.admits(Some("abc12")));
    assert!(!reserved.admits(None));
}
