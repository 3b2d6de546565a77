use covstats_rs::{Error, countries};

#[test]
fn every_supported_name_resolves() {
    for name in countries::supported_countries() {
        let code = countries::resolve(name)
            .unwrap_or_else(|e| panic!("{} failed to resolve: {}", name, e));
        assert_eq!(code.as_str().len(), 2, "{} resolved to {:?}", name, code);
        assert!(code.as_str().chars().all(|c| c.is_ascii_lowercase()));
    }
}

#[test]
fn resolution_is_case_insensitive() {
    let a = countries::resolve("south africa").unwrap();
    let b = countries::resolve("South Africa").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.as_str(), "za");
}

#[test]
fn names_outside_the_table_fail_with_unknown_country() {
    for bogus in ["Atlantis", "", "Gh ana", "Ghana2"] {
        match countries::resolve(bogus) {
            Err(Error::UnknownCountry(n)) => assert_eq!(n, bogus),
            other => panic!("{:?}: expected UnknownCountry, got {:?}", bogus, other),
        }
    }
}

#[test]
fn error_message_names_the_input() {
    let err = countries::resolve("Atlantis").unwrap_err();
    assert!(err.to_string().contains("Atlantis"));
}
