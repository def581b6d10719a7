#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worker::libs::data_storage::DataStorage;
    use worker::libs::formatter::TimeReportSummaryFormat;
    use worker::libs::settings::{AppKey, FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, SETTINGS_FILE_NAME};
    use worker::libs::time::TimeIntervalStartingPoint;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct SettingsTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for SettingsTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SettingsTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    fn assert_defaults(settings: &dyn KeyValueStore) {
        assert!(!settings.hide_registered_time());
        assert!(settings.confirm_clock_out());
        assert!(settings.ongoing_notification());
        assert!(settings.ongoing_notification_chronometer());
        assert_eq!(settings.starting_point_for_time_summary(), TimeIntervalStartingPoint::Month.raw_value());
        assert_eq!(settings.time_report_summary_format(), TimeReportSummaryFormat::DigitalClock.raw_value());
    }

    #[test]
    fn test_in_memory_defaults() {
        assert_defaults(&InMemoryKeyValueStore::new());
    }

    #[test]
    fn test_in_memory_set_and_get() {
        let mut settings = InMemoryKeyValueStore::new();
        settings.set_hide_registered_time(true).unwrap();
        settings.set_starting_point_for_time_summary(TimeIntervalStartingPoint::Week).unwrap();

        assert!(settings.hide_registered_time());
        assert_eq!(
            TimeIntervalStartingPoint::try_from(settings.starting_point_for_time_summary()),
            Ok(TimeIntervalStartingPoint::Week)
        );
    }

    #[test]
    fn test_value_of_other_type_reads_default() {
        let mut settings = InMemoryKeyValueStore::new();
        settings.set_int(AppKey::ConfirmClockOut, 0).unwrap();
        assert!(settings.bool(AppKey::ConfirmClockOut, true));
    }

    #[test]
    fn test_key_names() {
        let names: Vec<&str> = AppKey::ALL.iter().map(AppKey::raw_value).collect();
        assert_eq!(
            names,
            vec![
                "hide_registered_time",
                "confirm_clock_out",
                "ongoing_notification_enabled",
                "ongoing_notification_chronometer_enabled",
                "time_summary",
                "time_report_summary_format",
            ]
        );
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_file_store_defaults_without_file(_ctx: &mut SettingsTestContext) {
        assert_defaults(&FileKeyValueStore::new().unwrap());
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_file_store_persists_values(_ctx: &mut SettingsTestContext) {
        let mut settings = FileKeyValueStore::new().unwrap();
        settings.set_confirm_clock_out(false).unwrap();
        settings.set_time_report_summary_format(TimeReportSummaryFormat::Fraction).unwrap();

        let reopened = FileKeyValueStore::new().unwrap();
        assert!(!reopened.confirm_clock_out());
        assert_eq!(reopened.time_report_summary_format(), 2);
        assert!(!reopened.hide_registered_time());

        let content = std::fs::read_to_string(DataStorage::new().get_path(SETTINGS_FILE_NAME).unwrap()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["confirm_clock_out"], serde_json::json!(false));
        assert_eq!(json["time_report_summary_format"], serde_json::json!(2));
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_file_store_sees_changes_from_other_instances(_ctx: &mut SettingsTestContext) {
        let reader = FileKeyValueStore::new().unwrap();
        assert!(!reader.hide_registered_time());

        FileKeyValueStore::new().unwrap().set_hide_registered_time(true).unwrap();
        assert!(reader.hide_registered_time());
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_file_store_with_corrupt_file_reads_defaults(_ctx: &mut SettingsTestContext) {
        std::fs::write(DataStorage::new().get_path(SETTINGS_FILE_NAME).unwrap(), "not json").unwrap();

        let mut settings = FileKeyValueStore::new().unwrap();
        assert_defaults(&settings);

        settings.set_hide_registered_time(true).unwrap();
        assert!(settings.hide_registered_time());
        assert_eq!(std::fs::read_to_string(settings.corrupt_path()).unwrap(), "not json");
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_file_store_keeps_other_keys_when_writing(_ctx: &mut SettingsTestContext) {
        let mut settings = FileKeyValueStore::new().unwrap();
        settings.set_hide_registered_time(true).unwrap();
        settings.set_confirm_clock_out(false).unwrap();

        assert!(settings.hide_registered_time());
        assert!(!settings.confirm_clock_out());
        assert!(!settings.corrupt_path().exists());
    }
}
