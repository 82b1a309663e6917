use chrono::Month;
use num_traits::FromPrimitive;

use crate::datemath;
use crate::error::{Error, ErrorKind, Result};

pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const DEFAULT_SEPARATOR: &str = "\t\t";

/// Lays out a single month as text, one line per week starting on Sunday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRenderer {
    separator: String,
}

impl Default for CalendarRenderer {
    fn default() -> Self {
        CalendarRenderer {
            separator: DEFAULT_SEPARATOR.to_owned(),
        }
    }
}

impl CalendarRenderer {
    pub fn new(separator: &str) -> Self {
        CalendarRenderer {
            separator: separator.to_owned(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn header(&self) -> String {
        DAY_NAMES.join(self.separator.as_str())
    }

    /// Renders title, weekday header and the day grid of `month`.
    ///
    /// Day 1 is preceded by as many blank cells as its weekday index. Every
    /// cell is followed by the separator, except Saturdays which end the line.
    /// The last week is not padded, so a month not ending on a Saturday
    /// leaves a trailing separator and no final newline.
    pub fn render(&self, total_days_in_month: u32, year: i32, month: i32) -> Result<String> {
        let month_name = Month::from_i32(month)
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidArgument,
                    &format!("Month '{}' is not within 1..=12", month),
                )
            })?
            .name();

        let mut output = format!("{} {}\n{}\n", month_name, year, self.header());

        let mut weekday = datemath::first_day_of_month(year, month);
        log::debug!(
            "Rendering {} days of {} {} with offset {}",
            total_days_in_month,
            month_name,
            year,
            weekday
        );

        for _ in 0..weekday.max(0) {
            output.push_str(&self.separator);
        }

        for day in 1..=total_days_in_month {
            output.push_str(&day.to_string());
            if weekday == 6 {
                output.push('\n');
                weekday = 0;
            } else {
                output.push_str(&self.separator);
                weekday += 1;
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_lines(output: &str) -> Vec<&str> {
        output.split('\n').skip(2).collect()
    }

    #[test]
    fn header_has_no_trailing_separator() {
        assert_eq!(
            CalendarRenderer::default().header(),
            "Sun\t\tMon\t\tTue\t\tWed\t\tThu\t\tFri\t\tSat"
        );
    }

    #[test]
    fn january_2024() {
        let renderer = CalendarRenderer::default();
        let output = renderer.render(31, 2024, 1).unwrap();

        assert!(output.starts_with("January 2024\nSun\t\tMon"));

        let lines = grid_lines(&output);
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("\t\t1\t\t"));
        for line in &lines[..5] {
            assert_eq!(line.split("\t\t").count(), 7, "{:?}", line);
        }
        assert_eq!(lines[5], "28\t\t29\t\t30\t\t31\t\t");

        let max = lines
            .iter()
            .flat_map(|line| line.split("\t\t"))
            .filter(|cell| !cell.is_empty())
            .map(|cell| cell.parse::<u32>().unwrap())
            .max();
        assert_eq!(max, Some(31));
    }

    #[test]
    fn full_weeks_end_with_newline() {
        // 2015-02-01 is a Sunday, 28 days fill exactly four weeks
        let output = CalendarRenderer::new(" ").render(28, 2015, 2).unwrap();
        assert_eq!(
            output,
            "February 2015\n\
             Sun Mon Tue Wed Thu Fri Sat\n\
             1 2 3 4 5 6 7\n\
             8 9 10 11 12 13 14\n\
             15 16 17 18 19 20 21\n\
             22 23 24 25 26 27 28\n"
        );
    }

    #[test]
    fn offset_cells_before_first_day() {
        // 2000-01-01 is a Saturday
        let output = CalendarRenderer::new("|").render(31, 2000, 1).unwrap();
        let lines = grid_lines(&output);
        assert_eq!(lines[0], "||||||1");
        assert_eq!(lines[1], "2|3|4|5|6|7|8");
    }

    #[test]
    fn negative_weekday_stretches_the_first_week() {
        // congruence yields -1 for March of year -201
        let output = CalendarRenderer::new("|").render(31, -201, 3).unwrap();
        assert_eq!(
            output,
            "March -201\n\
             Sun|Mon|Tue|Wed|Thu|Fri|Sat\n\
             1|2|3|4|5|6|7|8\n\
             9|10|11|12|13|14|15\n\
             16|17|18|19|20|21|22\n\
             23|24|25|26|27|28|29\n\
             30|31|"
        );
    }

    #[test]
    fn smallest_year_renders() {
        let output = CalendarRenderer::new("|").render(31, i32::MIN, 1).unwrap();
        let lines: Vec<&str> = output.split('\n').collect();
        assert_eq!(lines[0], "January -2147483648");
        assert_eq!(lines[2], "|||1|2|3|4");
    }

    #[test]
    fn non_leap_february_has_no_29th() {
        let output = CalendarRenderer::default().render(28, 2023, 2).unwrap();
        assert!(!output.split(|c: char| c == '\t' || c == '\n').any(|cell| cell == "29"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let renderer = CalendarRenderer::default();
        assert_eq!(
            renderer.render(30, 2024, 9).unwrap(),
            renderer.render(30, 2024, 9).unwrap()
        );
    }

    #[test]
    fn invalid_month_is_rejected() {
        let renderer = CalendarRenderer::default();
        assert!(renderer.render(31, 2024, 0).is_err());
        assert!(renderer.render(31, 2024, 13).is_err());
    }
}
