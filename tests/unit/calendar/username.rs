use super::*;

#[test]
fn accepts_valid_logins() {
    let longest = "x".repeat(39);
    for login in ["a", "octocat", "Man0dya", "my-name", "a1-b2-c3", longest.as_str()] {
        assert!(validate_username(login).is_ok(), "{login}");
    }
}

#[test]
fn rejects_invalid_logins() {
    let too_long = "x".repeat(40);
    for login in [
        "",
        "-leading",
        "trailing-",
        "double--hyphen",
        "under_score",
        "spa ce",
        "émoji",
        too_long.as_str(),
    ] {
        let err = validate_username(login).unwrap_err();
        assert_eq!(
            err.fetch_kind(),
            Some(FetchFailureKind::InvalidUsername),
            "{login}"
        );
    }
}
