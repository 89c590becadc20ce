use paircover_ir::{parse_forbidden, parse_parameters, ParseError};

const PARAMS: &str = "\
# switch under test
Switch : on, off

Browser: firefox, chrome, safari
Locale:en , fr,de
";

#[test]
fn test_parse_parameters_preserves_declaration_order() {
    let u = parse_parameters(PARAMS).unwrap();
    assert_eq!(u.parameter_count(), 3);
    assert_eq!(u.parameters()[0].name, "Switch");
    assert_eq!(u.parameters()[1].name, "Browser");
    assert_eq!(u.parameters()[2].name, "Locale");
    assert_eq!(u.parameters()[1].values, vec!["firefox", "chrome", "safari"]);
    assert_eq!(u.parameters()[2].values, vec!["en", "fr", "de"]);
}

#[test]
fn test_parse_parameters_counts() {
    let u = parse_parameters(PARAMS).unwrap();
    assert_eq!(u.value_count(), 8);
    // 2*3 + 2*3 + 3*3
    assert_eq!(u.pair_count(), 21);
}

#[test]
fn test_blank_and_comment_lines_skipped() {
    let u = parse_parameters("# only a comment\n\n  \nA: x, y\n").unwrap();
    assert_eq!(u.parameter_count(), 1);
}

#[test]
fn test_missing_separator_is_an_error() {
    let err = parse_parameters("A: x, y\nno separator here\n").unwrap_err();
    assert!(matches!(err, ParseError::MissingSeparator { line: 2 }));
}

#[test]
fn test_empty_value_list_is_an_error() {
    let err = parse_parameters("A:  , \n").unwrap_err();
    assert!(matches!(err, ParseError::NoValues { line: 1, .. }));
}

#[test]
fn test_empty_name_is_an_error() {
    let err = parse_parameters(" : x, y\n").unwrap_err();
    assert!(matches!(err, ParseError::EmptyName { line: 1 }));
}

#[test]
fn test_parse_forbidden_resolves_to_indices() {
    let u = parse_parameters(PARAMS).unwrap();
    let combos = parse_forbidden("Switch = off & Browser = safari\nLocale=de\n", &u).unwrap();
    assert_eq!(combos.len(), 2);

    let first = &combos[0];
    assert_eq!(first.terms.len(), 2);
    assert_eq!(first.terms[0].parameter, 0);
    assert_eq!(first.terms[0].value, u.value_index(0, "off").unwrap());
    assert_eq!(first.terms[1].parameter, 1);
    assert_eq!(first.terms[1].value, u.value_index(1, "safari").unwrap());

    assert_eq!(combos[1].terms.len(), 1);
    assert_eq!(combos[1].terms[0].parameter, 2);
}

#[test]
fn test_parse_forbidden_unknown_parameter() {
    let u = parse_parameters(PARAMS).unwrap();
    let err = parse_forbidden("Os = linux\n", &u).unwrap_err();
    assert!(matches!(err, ParseError::UnknownParameter { line: 1, .. }));
}

#[test]
fn test_parse_forbidden_unknown_value() {
    let u = parse_parameters(PARAMS).unwrap();
    let err = parse_forbidden("Browser = lynx\n", &u).unwrap_err();
    assert!(matches!(err, ParseError::UnknownValue { line: 1, .. }));
}

#[test]
fn test_parse_forbidden_missing_assignment() {
    let u = parse_parameters(PARAMS).unwrap();
    let err = parse_forbidden("Browser chrome\n", &u).unwrap_err();
    assert!(matches!(err, ParseError::MissingAssignment { line: 1, .. }));
}
