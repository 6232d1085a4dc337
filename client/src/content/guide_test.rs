use super::*;

#[test]
fn no_level_keeps_every_section() {
    assert_eq!(at_level(None).len(), SECTIONS.len());
}

#[test]
fn level_filter_keeps_order() {
    let titles: Vec<_> = at_level(Some(Level::Basic)).iter().map(|s| s.title).collect();
    assert_eq!(titles, ["Basic Operational Security", "Physical Security"]);
}

#[test]
fn every_advanced_warning_is_kept() {
    let warned = at_level(Some(Level::Advanced)).iter().filter(|s| s.warning.is_some()).count();
    assert_eq!(warned, 2);
}

#[test]
fn section_ids_are_unique() {
    let mut ids: Vec<u32> = SECTIONS.iter().map(|s| s.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), SECTIONS.len());
}
