use super::*;

#[test]
fn empty_search_lists_everything() {
    assert_eq!(matching("", None).len(), CONTACTS.len());
}

#[test]
fn search_matches_name_or_code_ignoring_case() {
    let by_name: Vec<_> = matching("relay", None).iter().map(|c| c.code).collect();
    assert_eq!(by_name, ["ER-789"]);
    let by_code: Vec<_> = matching("sh-0", None).iter().map(|c| c.name).collect();
    assert_eq!(by_code, ["Safe House Alpha"]);
}

#[test]
fn status_filter_narrows_results() {
    let compromised = matching("", Some(ContactStatus::Compromised));
    assert_eq!(compromised.len(), 1);
    assert_eq!(compromised[0].code, "GP-000");
    assert!(matching("alpha", Some(ContactStatus::Offline)).is_empty());
}

#[test]
fn status_parses_from_select_values() {
    assert_eq!("online".parse(), Ok(ContactStatus::Online));
    assert!("all".parse::<ContactStatus>().is_err());
}
