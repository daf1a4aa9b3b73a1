//! input.rs
//!
//! Interactive collection of one employee record. Each prompt keeps asking
//! until the entry is valid; validation itself lives in plain functions so
//! the rules are testable without a terminal.

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Input;

use crate::employee::Employee;

const EMPTY_MSG: &str = "Ovo polje ne može biti prazno. Molimo pokušajte ponovo.";
const OIB_MSG: &str = "OIB mora biti točno 11 znamenki. Molimo pokušajte ponovo.";
const DATE_MSG: &str =
    "Pogrešan format datuma ili datum veći od trenutnog. Molimo unesite datum u formatu dd.mm.yyyy.";

/// Prompts for every field of the record. `today` is the upper bound for the
/// employment date; pass the same value used as the tenure reference so the
/// two can never disagree.
pub fn collect_employee(today: NaiveDate) -> Result<Employee> {
    Ok(Employee {
        first_name: prompt_nonempty("Unesite ime")?,
        last_name: prompt_nonempty("Unesite prezime")?,
        oib: prompt_oib("Unesite OIB (11 znamenki)")?,
        role: prompt_nonempty("Unesite ulogu")?,
        employment_date: prompt_date("Unesite datum zaposlenja (dd.mm.yyyy)", today)?,
    })
}

fn prompt_nonempty(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|s: &String| validate_nonempty(s))
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn prompt_oib(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|s: &String| validate_oib(s.trim()))
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn prompt_date(prompt: &str, today: NaiveDate) -> Result<NaiveDate> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|s: &String| parse_employment_date(s.trim(), today).map(|_| ()))
        .interact_text()?;
    // The validator just accepted this exact string.
    parse_employment_date(value.trim(), today)
        .map_err(|msg| anyhow::anyhow!("{msg}"))
}

/// Holds the window open until the user presses Enter.
pub fn wait_for_enter() -> Result<()> {
    println!("Pritisnite Enter za nastavak...");
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(())
}

fn validate_nonempty(s: &str) -> Result<(), &'static str> {
    if s.trim().is_empty() {
        Err(EMPTY_MSG)
    } else {
        Ok(())
    }
}

fn validate_oib(s: &str) -> Result<(), &'static str> {
    if s.len() == 11 && s.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(OIB_MSG)
    }
}

/// Parses `dd.mm.yyyy` and rejects dates after `today`. The error is the
/// user-facing guidance line, the same for both failure modes.
fn parse_employment_date(s: &str, today: NaiveDate) -> Result<NaiveDate, &'static str> {
    match NaiveDate::parse_from_str(s, "%d.%m.%Y") {
        Ok(date) if date <= today => Ok(date),
        _ => Err(DATE_MSG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    #[test]
    fn nonempty_rejects_blank_and_whitespace() {
        assert!(validate_nonempty("").is_err());
        assert!(validate_nonempty("   \t").is_err());
        assert!(validate_nonempty("Ana").is_ok());
    }

    #[test]
    fn oib_must_be_exactly_eleven_digits() {
        assert!(validate_oib("12345678901").is_ok());
        assert!(validate_oib("1234567890").is_err()); // too short
        assert!(validate_oib("123456789012").is_err()); // too long
        assert!(validate_oib("1234567890a").is_err());
        assert!(validate_oib("").is_err());
        assert!(validate_oib("-2345678901").is_err());
    }

    #[test]
    fn date_parses_fixed_pattern_only() {
        assert_eq!(
            parse_employment_date("15.01.2020", today()),
            Ok(NaiveDate::from_ymd_opt(2020, 1, 15).unwrap())
        );
        assert!(parse_employment_date("2020-01-15", today()).is_err());
        assert!(parse_employment_date("32.01.2020", today()).is_err());
        assert!(parse_employment_date("29.02.2023", today()).is_err());
        assert!(parse_employment_date("", today()).is_err());
    }

    #[test]
    fn date_may_not_be_in_the_future() {
        assert!(parse_employment_date("27.08.2026", today()).is_err());
        assert!(parse_employment_date("26.08.2026", today()).is_ok());
    }
}
