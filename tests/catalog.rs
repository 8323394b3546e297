//! A host application installs its own locale catalog before the first
//! render. Runs as its own process, so the process-wide catalog starts empty.

use durafmt::config::Settings;
use durafmt::locale::{self, LocaleTable};
use durafmt::{DurationValue, Error, Format, Unit};

#[test]
fn test_host_catalog_is_kept() {
    assert!(!locale::catalog_installed());

    let mut table = LocaleTable::builtin();
    table.insert("en", "hours_plural", "{count} hrs");
    table.insert("uk", "hours", "{count} година");
    assert!(locale::install_catalog(table));
    assert!(locale::catalog_installed());

    // a second install is refused
    assert!(!locale::install_catalog(LocaleTable::builtin()));

    let d = DurationValue::from_hours(3);
    assert_eq!(d.humanize("en", Format::Long, Unit::Seconds).unwrap(), "3 hrs");
    assert_eq!(
        DurationValue::from_hours(1)
            .humanize("uk", Format::Long, Unit::Seconds)
            .unwrap(),
        "1 година"
    );

    // settings pointing at other resources do not replace the host catalog
    let settings = Settings {
        resources: Some("/nonexistent/locales.yaml".to_string()),
        locale_hint: Some("ru-RU".to_string()),
        ..Settings::default()
    };
    let humanizer = settings.install().unwrap();
    assert_eq!(
        humanizer
            .humanize(d, "", Format::Short, Unit::Seconds)
            .unwrap(),
        "3ч"
    );
    assert_eq!(
        humanizer
            .humanize(d, "en", Format::Long, Unit::Seconds)
            .unwrap(),
        "3 hrs"
    );

    assert!(matches!(
        d.humanize("uk", Format::Long, Unit::Seconds),
        Err(Error::MissingResource { .. })
    ));
}
