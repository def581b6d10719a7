#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Weekday, Datelike};
    use worker::libs::error::WorkerError;
    use worker::libs::time::{
        local_date, local_timestamp, month_start, parse_clock_time, parse_date, start_of_day, week_start, Accumulated, HoursMinutes,
        TimeIntervalStartingPoint,
    };

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_from_milliseconds_truncates_to_minutes() {
        assert_eq!(HoursMinutes::from_milliseconds(3_600_000), HoursMinutes::new(1, 0));
        assert_eq!(HoursMinutes::from_milliseconds(9_000_000), HoursMinutes::new(2, 30));
        assert_eq!(HoursMinutes::from_milliseconds(59_999), HoursMinutes::EMPTY);
        assert_eq!(HoursMinutes::from_milliseconds(0), HoursMinutes::EMPTY);
    }

    #[test]
    fn test_addition_carries_minutes_into_hours() {
        let sum = HoursMinutes::new(1, 45) + HoursMinutes::new(0, 30);
        assert_eq!(sum, HoursMinutes::new(2, 15));
        assert!(sum.minutes < 60);
    }

    #[test]
    fn test_subtraction_keeps_sign_on_both_fields() {
        let difference = HoursMinutes::new(7, 52) - HoursMinutes::WORKDAY;
        assert_eq!(difference, HoursMinutes::new(0, -8));
        assert!(!difference.is_positive());

        let difference = HoursMinutes::new(5, 30) - HoursMinutes::WORKDAY;
        assert_eq!(difference, HoursMinutes::new(-2, -30));

        let difference = HoursMinutes::new(9, 0) - HoursMinutes::WORKDAY;
        assert_eq!(difference, HoursMinutes::new(1, 0));
        assert!(difference.is_positive());
    }

    #[test]
    fn test_accumulated_empty_is_zero() {
        let empty: Vec<HoursMinutes> = Vec::new();
        assert_eq!(empty.accumulated(), HoursMinutes::EMPTY);
        assert!(HoursMinutes::EMPTY.is_empty());
    }

    #[test]
    fn test_accumulated_is_order_independent() {
        let a = HoursMinutes::new(3, 50);
        let b = HoursMinutes::new(4, 25);
        let c = HoursMinutes::new(0, 59);

        let forward = vec![a, b, c].accumulated();
        let backward = vec![c, b, a].accumulated();
        assert_eq!(forward, backward);
        assert_eq!(forward, HoursMinutes::new(9, 14));
    }

    #[test]
    fn test_starting_point_raw_values() {
        assert_eq!(TimeIntervalStartingPoint::Month.raw_value(), 0);
        assert_eq!(TimeIntervalStartingPoint::Week.raw_value(), 1);
        assert_eq!(TimeIntervalStartingPoint::try_from(0), Ok(TimeIntervalStartingPoint::Month));
        assert_eq!(TimeIntervalStartingPoint::try_from(1), Ok(TimeIntervalStartingPoint::Week));
        assert_eq!(TimeIntervalStartingPoint::try_from(2), Err(WorkerError::InvalidStartingPoint(2)));
        assert_eq!(TimeIntervalStartingPoint::try_from(-1), Err(WorkerError::InvalidStartingPoint(-1)));
    }

    #[test]
    fn test_starting_point_start_date() {
        let wednesday = date(2024, 6, 12);
        assert_eq!(TimeIntervalStartingPoint::Week.start_date(wednesday), date(2024, 6, 10));
        assert_eq!(TimeIntervalStartingPoint::Month.start_date(wednesday), date(2024, 6, 1));
    }

    #[test]
    fn test_week_start_is_monday() {
        assert_eq!(week_start(date(2024, 6, 3)), date(2024, 6, 3));
        assert_eq!(week_start(date(2024, 6, 9)), date(2024, 6, 3));
        assert_eq!(week_start(date(2024, 6, 10)), date(2024, 6, 10));
        assert_eq!(week_start(date(2024, 6, 9)).weekday(), Weekday::Mon);
        assert_eq!(month_start(date(2024, 2, 29)), date(2024, 2, 1));
    }

    #[test]
    fn test_start_of_day_round_trips_through_local_date() {
        let day = date(2024, 6, 5);
        assert_eq!(local_date(start_of_day(day)), day);
        assert_eq!(local_date(start_of_day(day) - 1), date(2024, 6, 4));
    }

    #[test]
    fn test_parse_date() {
        let today = date(2024, 6, 12);
        assert_eq!(parse_date("today", today), Some(today));
        assert_eq!(parse_date("Today", today), Some(today));
        assert_eq!(parse_date("2024-06-03", today), Some(date(2024, 6, 3)));
        assert_eq!(parse_date("03.06.2024", today), None);
    }

    #[test]
    fn test_parse_clock_time() {
        let today = date(2024, 6, 12);
        let nine = local_timestamp(today.and_hms_opt(9, 0, 0).unwrap()).unwrap();
        assert_eq!(parse_clock_time("09:00", today), Some(nine));

        let earlier = local_timestamp(date(2024, 6, 10).and_hms_opt(17, 30, 0).unwrap()).unwrap();
        assert_eq!(parse_clock_time("2024-06-10 17:30", today), Some(earlier));

        assert_eq!(parse_clock_time("25:00", today), None);
        assert_eq!(parse_clock_time("soon", today), None);
    }
}
