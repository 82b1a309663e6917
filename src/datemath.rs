use crate::error::{Error, ErrorKind, Result};

const DAYS_IN_MONTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Number of days of every month in `year`, January first.
///
/// Every call hands out its own copy of the table.
pub fn days_in_months(year: i32) -> [u32; 12] {
    let mut days = DAYS_IN_MONTHS;
    if is_leap_year(year) {
        days[1] = 29;
    }
    days
}

pub fn days_in_month(year: i32, month: i32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            &format!("Month '{}' is not within 1..=12", month),
        ));
    }

    Ok(days_in_months(year)[(month - 1) as usize])
}

/// Weekday of the first day of `month` by Zeller's congruence.
///
/// The result is the raw congruence value read as 0 = Sunday ... 6 = Saturday.
/// January and February count as months 13 and 14 of the previous year.
/// Months outside of 1..=12 are not checked and give whatever the
/// arithmetic yields; so do negative years, where the remainder may be
/// negative. All terms wrap on overflow, so every `i32` year is accepted.
pub fn first_day_of_month(year: i32, month: i32) -> i32 {
    let (shifted_year, shifted_month) = if month < 3 {
        (year.wrapping_sub(1), month.wrapping_add(12))
    } else {
        (year, month)
    };

    let century = shifted_year / 100;
    let year_of_century = shifted_year % 100;

    let weekday = (26i32.wrapping_mul(shifted_month.wrapping_add(1)) / 10)
        .wrapping_add(year_of_century)
        .wrapping_add(year_of_century / 4)
        .wrapping_add(century / 4)
        .wrapping_add(century.wrapping_mul(5))
        % 7;

    log::debug!("First day of {}-{:02} is weekday {}", year, month, weekday);

    weekday
}
