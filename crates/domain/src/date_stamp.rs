use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

use crate::DomainError;

pub const STAMP_WINDOW_START: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(date) => date,
    None => panic!("invalid stamp window start"),
};

pub const STAMP_WINDOW_END: NaiveDate = match NaiveDate::from_ymd_opt(2010, 12, 31) {
    Some(date) => date,
    None => panic!("invalid stamp window end"),
};

/// Formats a date the way early 2000s cameras burned it in: `07-14-2004`.
pub fn format_date_stamp<D: Datelike>(date: &D) -> String {
    format!("{:02}-{:02}-{}", date.month(), date.day(), date.year())
}

pub fn parse_date_stamp(text: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(text.trim(), "%m-%d-%Y")
        .map_err(|_| DomainError::InvalidDateStamp(text.to_string()))
}

/// Draws a point in time uniformly over the milliseconds between the window
/// start and end midnights, both inclusive.
pub fn random_early_2000s_date<R: Rng + ?Sized>(rng: &mut R) -> NaiveDateTime {
    let start = STAMP_WINDOW_START.and_time(NaiveTime::MIN);
    let end = STAMP_WINDOW_END.and_time(NaiveTime::MIN);
    let span_ms = (end - start).num_milliseconds();
    let offset_ms = rng.random_range(0..=span_ms);
    start
        .checked_add_signed(Duration::milliseconds(offset_ms))
        .unwrap_or(start)
}

/// Formats `reference`, or a random date from 2000 to 2010 when absent.
/// The random branch is intentionally not reproducible.
pub fn generate_date_stamp(reference: Option<NaiveDate>) -> String {
    match reference {
        Some(date) => format_date_stamp(&date),
        None => format_date_stamp(&random_early_2000s_date(&mut rand::rng())),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn formats_reference_date_with_zero_padding() {
        assert_eq!(generate_date_stamp(Some(date(2004, 7, 14))), "07-14-2004");
        assert_eq!(format_date_stamp(&date(2009, 1, 3)), "01-03-2009");
        assert_eq!(format_date_stamp(&date(2010, 12, 31)), "12-31-2010");
    }

    #[test]
    fn random_stamps_stay_in_window() {
        for _ in 0..500 {
            let stamp = generate_date_stamp(None);
            let parsed = parse_date_stamp(&stamp).expect("well-formed stamp");
            assert!(
                (2000..=2010).contains(&parsed.year()),
                "year out of window: {stamp}"
            );
        }
    }

    #[test]
    fn seeded_draws_cover_both_ends_of_decade() {
        let mut rng = StdRng::seed_from_u64(7);
        let years: Vec<i32> = (0..2_000)
            .map(|_| random_early_2000s_date(&mut rng).year())
            .collect();
        assert!(years.iter().all(|year| (2000..=2010).contains(year)));
        assert!(years.contains(&2000));
        assert!(years.contains(&2010));
    }

    #[test]
    fn draw_never_passes_window_end() {
        let mut rng = StdRng::seed_from_u64(42);
        let end = STAMP_WINDOW_END.and_time(NaiveTime::MIN);
        for _ in 0..1_000 {
            assert!(random_early_2000s_date(&mut rng) <= end);
        }
    }

    #[test]
    fn parse_rejects_other_layouts() {
        assert_eq!(parse_date_stamp("07-14-2004"), Ok(date(2004, 7, 14)));
        assert!(matches!(
            parse_date_stamp("2004-07-14"),
            Err(DomainError::InvalidDateStamp(_))
        ));
    }
}
