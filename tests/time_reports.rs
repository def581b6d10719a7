#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worker::db::projects::Projects;
    use worker::db::time_intervals::TimeIntervals;
    use worker::db::time_reports::TimeReports;
    use worker::libs::project::{create_project, Project};
    use worker::libs::settings::{InMemoryKeyValueStore, KeyValueStore};
    use worker::libs::time::{local_timestamp, HoursMinutes};
    use worker::libs::time_interval::{clock_in, clock_out, mark_registered_time, TimeInterval};
    use worker::libs::time_report::{count_time_report_weeks, count_time_reports, find_time_report_weeks, find_time_reports, LoadRange};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Three days in the week of 2024-06-03 and one in the next week:
    /// Monday fully registered, Tuesday unregistered, Wednesday mixed,
    /// next Monday unregistered.
    struct TimeReportTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
        time_reports: TimeReports,
        settings: InMemoryKeyValueStore,
        project: Project,
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn at(day: u32, hour: u32) -> i64 {
        local_timestamp(date(day).and_hms_opt(hour, 0, 0).unwrap()).unwrap()
    }

    fn add(time_intervals: &mut TimeIntervals, project: &Project, day: u32, from: u32, to: u32) -> TimeInterval {
        clock_in(time_intervals, project, at(day, from)).unwrap();
        clock_out(time_intervals, project, at(day, to)).unwrap()
    }

    impl TestContext for TimeReportTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            let project = create_project(&mut Projects::new().unwrap(), "Worker").unwrap();
            let mut time_intervals = TimeIntervals::new().unwrap();

            let monday = add(&mut time_intervals, &project, 3, 8, 12);
            add(&mut time_intervals, &project, 4, 8, 16);
            let wednesday = add(&mut time_intervals, &project, 5, 8, 10);
            add(&mut time_intervals, &project, 5, 11, 12);
            add(&mut time_intervals, &project, 10, 9, 17);
            mark_registered_time(&mut time_intervals, &[monday, wednesday]).unwrap();

            TimeReportTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
                time_reports: TimeReports::new().unwrap(),
                settings: InMemoryKeyValueStore::new(),
                project,
            }
        }
    }

    #[test_context(TimeReportTestContext)]
    #[test]
    fn test_count_days(ctx: &mut TimeReportTestContext) {
        assert_eq!(count_time_reports(&ctx.settings, &ctx.time_reports, &ctx.project).unwrap(), 4);

        ctx.settings.set_hide_registered_time(true).unwrap();
        assert_eq!(count_time_reports(&ctx.settings, &ctx.time_reports, &ctx.project).unwrap(), 3);
    }

    #[test_context(TimeReportTestContext)]
    #[test]
    fn test_find_days_pages_newest_first(ctx: &mut TimeReportTestContext) {
        let first = find_time_reports(&ctx.settings, &ctx.time_reports, &ctx.project, LoadRange::new(0, 2)).unwrap();
        let dates: Vec<NaiveDate> = first.iter().map(|day| day.date).collect();
        assert_eq!(dates, vec![date(10), date(5)]);
        assert_eq!(first[1].time_intervals.len(), 2);
        assert_eq!(first[1].time_summary(), HoursMinutes::new(3, 0));

        let second = find_time_reports(&ctx.settings, &ctx.time_reports, &ctx.project, LoadRange::new(2, 2)).unwrap();
        let dates: Vec<NaiveDate> = second.iter().map(|day| day.date).collect();
        assert_eq!(dates, vec![date(4), date(3)]);
        assert!(second[1].is_registered());
        assert!(!second[0].is_registered());

        let past_end = find_time_reports(&ctx.settings, &ctx.time_reports, &ctx.project, LoadRange::new(4, 2)).unwrap();
        assert!(past_end.is_empty());
    }

    #[test_context(TimeReportTestContext)]
    #[test]
    fn test_find_days_hiding_registered_time(ctx: &mut TimeReportTestContext) {
        ctx.settings.set_hide_registered_time(true).unwrap();

        let days = find_time_reports(&ctx.settings, &ctx.time_reports, &ctx.project, LoadRange::new(0, 10)).unwrap();
        let dates: Vec<NaiveDate> = days.iter().map(|day| day.date).collect();
        assert_eq!(dates, vec![date(10), date(5), date(4)]);

        assert_eq!(days[1].time_intervals.len(), 1);
        assert_eq!(days[1].time_summary(), HoursMinutes::new(1, 0));
        assert!(days.iter().all(|day| !day.is_registered()));
    }

    #[test_context(TimeReportTestContext)]
    #[test]
    fn test_setting_is_read_on_every_query(ctx: &mut TimeReportTestContext) {
        let range = LoadRange::new(0, 10);
        assert_eq!(find_time_reports(&ctx.settings, &ctx.time_reports, &ctx.project, range).unwrap().len(), 4);

        ctx.settings.set_hide_registered_time(true).unwrap();
        assert_eq!(find_time_reports(&ctx.settings, &ctx.time_reports, &ctx.project, range).unwrap().len(), 3);

        ctx.settings.set_hide_registered_time(false).unwrap();
        assert_eq!(find_time_reports(&ctx.settings, &ctx.time_reports, &ctx.project, range).unwrap().len(), 4);
    }

    #[test_context(TimeReportTestContext)]
    #[test]
    fn test_weeks(ctx: &mut TimeReportTestContext) {
        assert_eq!(count_time_report_weeks(&ctx.settings, &ctx.time_reports, &ctx.project).unwrap(), 2);

        let weeks = find_time_report_weeks(&ctx.settings, &ctx.time_reports, &ctx.project, LoadRange::new(0, 10)).unwrap();
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].start, date(10));
        assert_eq!(weeks[0].time_summary(), HoursMinutes::new(8, 0));
        assert_eq!(weeks[1].start, date(3));
        assert_eq!(weeks[1].days.len(), 3);
        assert_eq!(weeks[1].time_summary(), HoursMinutes::new(15, 0));

        let second = find_time_report_weeks(&ctx.settings, &ctx.time_reports, &ctx.project, LoadRange::new(1, 1)).unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].start, date(3));
    }

    #[test_context(TimeReportTestContext)]
    #[test]
    fn test_weeks_hiding_registered_time(ctx: &mut TimeReportTestContext) {
        ctx.settings.set_hide_registered_time(true).unwrap();

        let weeks = find_time_report_weeks(&ctx.settings, &ctx.time_reports, &ctx.project, LoadRange::new(0, 10)).unwrap();
        assert_eq!(weeks[1].start, date(3));
        assert_eq!(weeks[1].days.len(), 2);
        assert_eq!(weeks[1].time_summary(), HoursMinutes::new(9, 0));
    }

    #[test_context(TimeReportTestContext)]
    #[test]
    fn test_other_projects_are_not_counted(ctx: &mut TimeReportTestContext) {
        let other = create_project(&mut Projects::new().unwrap(), "Other").unwrap();
        assert_eq!(count_time_reports(&ctx.settings, &ctx.time_reports, &other).unwrap(), 0);
        assert!(find_time_reports(&ctx.settings, &ctx.time_reports, &other, LoadRange::new(0, 10))
            .unwrap()
            .is_empty());
    }
}
