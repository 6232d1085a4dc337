use console_core::Role;
use console_core::model::{PunishmentStatus, ReportStatus};

use super::*;

#[test]
fn all_selects_nothing() {
    assert_eq!(selected::<ReportStatus>("all"), None);
    assert_eq!(selected::<Role>("all"), None);
}

#[test]
fn wire_values_select_their_variant() {
    assert_eq!(selected("network_admin"), Some(Role::NetworkAdmin));
    assert_eq!(selected("approved"), Some(ReportStatus::Approved));
    assert_eq!(selected("cancelled"), Some(PunishmentStatus::Cancelled));
}

#[test]
fn unknown_is_never_a_filter() {
    assert_eq!(selected::<ReportStatus>("unknown"), None);
}
