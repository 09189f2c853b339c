use crate::phoneinput::{CountryResolution, compose};

use super::{CountryCode, get_normalizer};

#[test]
fn compose_concatenates() {
    assert_eq!(compose("1", "5551234567"), "+15551234567");
    assert_eq!(compose("44", ""), "+44");
}

#[test]
fn decompose_empty_and_unmatched() {
    let normalizer = get_normalizer();
    assert_eq!(normalizer.decompose("", None), None);
    assert_eq!(normalizer.decompose("+", Some(CountryCode::us())), None);
    assert_eq!(normalizer.decompose("+999123", None), None);
    assert_eq!(normalizer.decompose("abc", None), None);
}

#[test]
fn decompose_without_hint() {
    let normalizer = get_normalizer();
    let decomposed = normalizer.decompose("+447911123456", None).unwrap();
    assert_eq!(decomposed.country.code, CountryCode::gb());
    assert_eq!(decomposed.digits, "7911123456");
    assert_eq!(decomposed.resolution, CountryResolution::Unique);
}

#[test]
fn decompose_strips_separators() {
    let normalizer = get_normalizer();
    let decomposed = normalizer.decompose("+44 (7911) 123-456", None).unwrap();
    assert_eq!(decomposed.country.code, CountryCode::gb());
    assert_eq!(decomposed.digits, "7911123456");

    // full-width digits
    let decomposed = normalizer.decompose("+４４７９１１１２３４５６", None).unwrap();
    assert_eq!(decomposed.country.code, CountryCode::gb());
    assert_eq!(decomposed.digits, "7911123456");
}

#[test]
fn decompose_prefers_longest_dial_code() {
    let normalizer = get_normalizer();

    let decomposed = normalizer.decompose("+12642351234", Some(CountryCode::us())).unwrap();
    assert_eq!(decomposed.country.code, CountryCode::ai());
    assert_eq!(decomposed.digits, "2351234");
    assert_eq!(decomposed.resolution, CountryResolution::Unique);

    let decomposed = normalizer.decompose("+441534123456", Some(CountryCode::gb())).unwrap();
    assert_eq!(decomposed.country.code, CountryCode::je());
    assert_eq!(decomposed.digits, "123456");
}

#[test]
fn ambiguous_dial_code_tie_break() {
    let normalizer = get_normalizer();

    let with_hint = normalizer.decompose("+15551234567", Some(CountryCode::us())).unwrap();
    assert_eq!(with_hint.country.code, CountryCode::us());
    assert_eq!(with_hint.resolution, CountryResolution::PreferredHint);

    // hint is matched case-insensitively
    let lower_hint = normalizer.decompose("+15551234567", Some("ca")).unwrap();
    assert_eq!(lower_hint.country.code, CountryCode::ca());
    assert_eq!(lower_hint.resolution, CountryResolution::PreferredHint);

    // Canada is listed before the United States
    let without_hint = normalizer.decompose("+15551234567", None).unwrap();
    assert_eq!(without_hint.country.code, CountryCode::ca());
    assert_eq!(without_hint.resolution, CountryResolution::RegistryOrder);

    // a hint outside the candidates doesn't count
    let foreign_hint = normalizer.decompose("+15551234567", Some(CountryCode::gb())).unwrap();
    assert_eq!(foreign_hint.country.code, CountryCode::ca());
    assert_eq!(foreign_hint.resolution, CountryResolution::RegistryOrder);

    for _ in 0..3 {
        assert_eq!(normalizer.decompose("+79123456789", None).unwrap().country.code, CountryCode::kz());
    }
    let russia = normalizer.decompose("+79123456789", Some(CountryCode::ru())).unwrap();
    assert_eq!(russia.country.code, CountryCode::ru());
    assert_eq!(russia.digits, "9123456789");
}

#[test]
fn decompose_truncates_to_limit() {
    let normalizer = get_normalizer();
    let decomposed = normalizer.decompose("+1555123456789", Some(CountryCode::us())).unwrap();
    assert_eq!(decomposed.digits, "5551234567");

    // no example number for France: ceiling applies
    let decomposed = normalizer.decompose("+3312345678901234567", None).unwrap();
    assert_eq!(decomposed.country.code, CountryCode::fr());
    assert_eq!(decomposed.digits, "123456789012345");
}

#[test]
fn round_trip_with_same_hint() {
    let normalizer = get_normalizer();
    let values = [
        ("+447911123456", CountryCode::gb()),
        ("+15551234567", CountryCode::us()),
        ("+15062345678", CountryCode::ca()),
        ("+79123456789", CountryCode::ru()),
        ("+12642351234", CountryCode::ai()),
        ("+61412345678", CountryCode::au()),
        ("+1555", CountryCode::us()),
    ];
    for (value, hint) in values {
        let decomposed = normalizer.decompose(value, Some(hint)).unwrap();
        assert_eq!(decomposed.country.code, hint);
        assert_eq!(compose(decomposed.country.dial_code, &decomposed.digits), value);
    }
}
