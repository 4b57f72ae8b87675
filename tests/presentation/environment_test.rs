use studyhub::presentation::Environment;

#[test]
fn given_known_names_when_parsing_then_case_and_whitespace_are_ignored() {
    assert_eq!(Environment::try_from("Local".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from(" test ".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("PROD".to_string()), Ok(Environment::Prod));
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
}

#[test]
fn given_unknown_name_when_parsing_then_error_names_value() {
    let error = Environment::try_from("staging".to_string()).unwrap_err();

    assert!(error.contains("staging"));
}

#[test]
fn given_environments_when_checking_production_then_only_prod_is() {
    assert!(Environment::Prod.is_production());
    assert!(!Environment::Local.is_production());
    assert!(!Environment::Test.is_production());
    assert_eq!(Environment::default(), Environment::Local);
}
