use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::num::ParseIntError;
use std::str::FromStr;

use crate::datemath;
use crate::error::{Error, ErrorKind, Result};

const YEAR_PROMPT: &str = "Enter the year: ";
const MONTH_PROMPT: &str = "Enter Month (1=Jan, 2=Feb, etc.): ";
const DAYS_PROMPT: &str = "Enter Number of Days in Month or Enter 0 to Automatically Calculate: ";

/// The three values a calendar is requested with, as entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub year: i32,
    pub month: i32,
    pub days: i64,
}

/// A validated request ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub year: i32,
    pub month: i32,
    pub days: u32,
}

impl Request {
    pub fn new(year: i32, month: i32, days: i64) -> Self {
        Request { year, month, days }
    }

    /// Checks the month and replaces a day count of 0 by the month's length.
    pub fn resolve(&self) -> Result<Resolved> {
        let days_of_month = datemath::days_in_month(self.year, self.month)?;

        let days = match self.days {
            0 => days_of_month,
            d if d < 0 || d > u32::MAX as i64 => {
                return Err(Error::new(
                    ErrorKind::InvalidArgument,
                    &format!("Day count '{}' is not a valid number of days", d),
                ))
            }
            d => d as u32,
        };

        log::debug!(
            "Resolved request {}-{:02} to {} days",
            self.year,
            self.month,
            days
        );

        Ok(Resolved {
            year: self.year,
            month: self.month,
            days,
        })
    }
}

/// Reads whitespace separated integers from `reader`, optionally printing a
/// prompt to `writer` before each one.
pub struct Prompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    prompts: bool,
    tokens: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompter {
            reader,
            writer,
            prompts: true,
            tokens: VecDeque::new(),
        }
    }

    pub fn prompts(mut self, prompts: bool) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(ErrorKind::UnexpectedEof.into());
            }

            self.tokens
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn ask<T: FromStr<Err = ParseIntError>>(&mut self, prompt: &str) -> Result<T> {
        if self.prompts {
            self.writer.write_all(prompt.as_bytes())?;
            self.writer.flush()?;
        }

        let token = self.next_token()?;
        token.parse::<T>().map_err(|err| {
            let msg = format!("'{}' is not an integer: {}", token, err);
            Error::from(err).with_msg(&msg)
        })
    }

    /// Asks for year, month and day count, in that order.
    pub fn read_request(&mut self) -> Result<Request> {
        let year = self.ask::<i32>(YEAR_PROMPT)?;
        let month = self.ask::<i32>(MONTH_PROMPT)?;
        let days = self.ask::<i64>(DAYS_PROMPT)?;

        Ok(Request::new(year, month, days))
    }
}
