#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use worker::libs::formatter::{day_summary, DigitalHoursMinutesFormat};
    use worker::libs::time::{local_timestamp, HoursMinutes};
    use worker::libs::time_interval::TimeInterval;
    use worker::libs::time_report::{GroupTimeIntervals, LoadRange, TimeReportDay, TimeReportDayState};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn at(day: NaiveDate, hour: u32, minute: u32) -> i64 {
        local_timestamp(day.and_hms_opt(hour, minute, 0).unwrap()).unwrap()
    }

    fn interval(id: i64, start: i64, stop: Option<i64>, registered: bool) -> TimeInterval {
        TimeInterval::new(id, 1, start, stop, registered).unwrap()
    }

    #[test]
    fn test_day_summary_in_digital_clock() {
        let monday = date(2024, 6, 3);
        let day = TimeReportDay::new(monday, vec![interval(1, at(monday, 8, 0), Some(at(monday, 9, 0)), false)]);
        assert_eq!(day_summary(&day, &DigitalHoursMinutesFormat), "1:00 (-7:00)");

        let day = TimeReportDay::new(
            monday,
            vec![
                interval(1, at(monday, 8, 0), Some(at(monday, 9, 0)), false),
                interval(2, at(monday, 10, 0), Some(at(monday, 12, 30)), false),
            ],
        );
        assert_eq!(day.time_summary(), HoursMinutes::new(3, 30));
    }

    #[test]
    fn test_day_is_registered_only_when_all_intervals_are() {
        let monday = date(2024, 6, 3);
        let registered = interval(1, at(monday, 8, 0), Some(at(monday, 9, 0)), true);
        let unregistered = interval(2, at(monday, 10, 0), Some(at(monday, 11, 0)), false);

        assert!(TimeReportDay::new(monday, vec![registered.clone()]).is_registered());
        assert!(!TimeReportDay::new(monday, vec![registered, unregistered]).is_registered());
        assert!(!TimeReportDay::new(monday, Vec::new()).is_registered());
    }

    #[test]
    fn test_day_with_running_interval_is_active() {
        let monday = date(2024, 6, 3);
        let day = TimeReportDay::new(
            monday,
            vec![
                interval(1, at(monday, 8, 0), Some(at(monday, 9, 0)), false),
                interval(2, at(monday, 10, 0), None, false),
            ],
        );

        assert_eq!(day.state(), TimeReportDayState::Active);
        assert_eq!(day.time_summary(), HoursMinutes::new(1, 0));
        assert!(!day.is_registered());
    }

    #[test]
    fn test_running_registered_interval_is_still_active() {
        let monday = date(2024, 6, 3);
        let running = interval(1, at(monday, 8, 0), None, true);
        assert!(running.is_active());
        assert!(!running.is_registered());
    }

    #[test]
    fn test_day_difference() {
        let monday = date(2024, 6, 3);
        let day = TimeReportDay::new(monday, vec![interval(1, at(monday, 8, 0), Some(at(monday, 17, 0)), false)]);
        assert_eq!(day.time_difference(), HoursMinutes::new(1, 0));

        let day = TimeReportDay::new(monday, vec![interval(1, at(monday, 8, 0), Some(at(monday, 15, 52)), false)]);
        assert_eq!(day.time_difference(), HoursMinutes::new(0, -8));
    }

    #[test]
    fn test_group_by_day_orders_newest_first() {
        let monday = date(2024, 6, 3);
        let tuesday = date(2024, 6, 4);
        let days = vec![
            interval(1, at(monday, 8, 0), Some(at(monday, 9, 0)), false),
            interval(2, at(tuesday, 8, 0), Some(at(tuesday, 9, 0)), false),
            interval(3, at(monday, 13, 0), Some(at(monday, 14, 0)), false),
            interval(4, at(monday, 13, 0), Some(at(monday, 15, 0)), false),
        ]
        .group_by_day();

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, tuesday);
        assert_eq!(days[1].date, monday);

        let ids: Vec<i64> = days[1].time_intervals.iter().map(|time_interval| time_interval.id).collect();
        assert_eq!(ids, vec![4, 3, 1]);
    }

    #[test]
    fn test_group_by_week_monday_to_sunday() {
        let monday = date(2024, 6, 3);
        let sunday = date(2024, 6, 9);
        let next_monday = date(2024, 6, 10);
        let weeks = vec![
            interval(1, at(monday, 8, 0), Some(at(monday, 10, 0)), false),
            interval(2, at(sunday, 8, 0), Some(at(sunday, 9, 30)), false),
            interval(3, at(next_monday, 8, 0), Some(at(next_monday, 9, 0)), false),
        ]
        .group_by_week();

        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].start, next_monday);
        assert_eq!(weeks[0].days.len(), 1);
        assert_eq!(weeks[1].start, monday);
        assert_eq!(weeks[1].days.len(), 2);
        assert_eq!(weeks[1].days[0].date, sunday);
        assert_eq!(weeks[1].time_summary(), HoursMinutes::new(3, 30));
    }

    #[test]
    fn test_week_is_registered_only_when_all_days_are() {
        let monday = date(2024, 6, 3);
        let tuesday = date(2024, 6, 4);
        let mut weeks = vec![
            interval(1, at(monday, 8, 0), Some(at(monday, 10, 0)), true),
            interval(2, at(tuesday, 8, 0), Some(at(tuesday, 9, 0)), false),
        ]
        .group_by_week();
        assert!(!weeks[0].is_registered());

        weeks[0].days[0].time_intervals[0].registered = true;
        assert!(weeks[0].is_registered());
    }

    #[test]
    fn test_load_range_page() {
        assert_eq!(LoadRange::page(0, 10), LoadRange::new(0, 10));
        assert_eq!(LoadRange::page(2, 10), LoadRange::new(20, 10));
    }
}
