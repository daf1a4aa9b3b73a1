//! Renders the collected record plus the computed tenure, either as the
//! labeled console report or as JSON for piping.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::employee::Employee;
use crate::plural::{PluralForms, PluralRule};
use crate::tenure::TenureDuration;

const GODINA: PluralForms = PluralForms {
    one: "godina",
    few: "godine",
    many: Some("godina"),
};

const MJESEC: PluralForms = PluralForms {
    one: "mjesec",
    few: "mjeseca",
    many: Some("mjeseci"),
};

const DAN: PluralForms = PluralForms {
    one: "dan",
    few: "dana",
    many: Some("dana"),
};

/// The labeled summary, one `Label: value` line per field, closing with the
/// tenure sentence. Years, months and days are pluralized independently.
pub fn render(employee: &Employee, tenure: &TenureDuration) -> String {
    let rule = PluralRule::Slavic;
    let staz = format!(
        "{} {}, {} {} i {} {}",
        tenure.years,
        rule.select(tenure.years, GODINA),
        tenure.months,
        rule.select(tenure.months, MJESEC),
        tenure.days,
        rule.select(tenure.days, DAN),
    );

    let mut out = String::new();
    for (label, value) in [
        ("Ime", employee.first_name.as_str()),
        ("Prezime", employee.last_name.as_str()),
        ("OIB", employee.oib.as_str()),
        ("Uloga", employee.role.as_str()),
    ] {
        out.push_str(&format!("{}: {value}\n", label.bold()));
    }
    out.push_str(&format!(
        "{}: {}\n",
        "Datum zaposlenja".bold(),
        employee.employment_date.format("%d.%m.%Y")
    ));
    out.push_str(&format!("{}: {}", "Radni staž".bold(), staz.cyan()));
    out
}

#[derive(Serialize)]
struct Summary<'a> {
    #[serde(flatten)]
    employee: &'a Employee,
    tenure: &'a TenureDuration,
}

pub fn render_json(employee: &Employee, tenure: &TenureDuration) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Summary { employee, tenure })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> (Employee, TenureDuration) {
        let employee = Employee {
            first_name: "Ana".into(),
            last_name: "Horvat".into(),
            oib: "12345678901".into(),
            role: "Programerka".into(),
            employment_date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
        };
        let tenure = employee
            .tenure(NaiveDate::from_ymd_opt(2021, 3, 10).unwrap())
            .unwrap();
        (employee, tenure)
    }

    #[test]
    fn report_lists_every_field_and_pluralizes_the_tenure() {
        colored::control::set_override(false);
        let (employee, tenure) = sample();
        let report = render(&employee, &tenure);
        assert_eq!(
            report,
            "Ime: Ana\n\
             Prezime: Horvat\n\
             OIB: 12345678901\n\
             Uloga: Programerka\n\
             Datum zaposlenja: 15.01.2020\n\
             Radni staž: 1 godina, 1 mjesec i 23 dana"
        );
    }

    #[test]
    fn few_forms_show_up_for_counts_of_two_to_four() {
        colored::control::set_override(false);
        let (employee, _) = sample();
        let tenure = TenureDuration {
            years: 2,
            months: 3,
            days: 4,
        };
        let report = render(&employee, &tenure);
        assert!(report.ends_with("2 godine, 3 mjeseca i 4 dana"), "{report}");
    }

    #[test]
    fn json_carries_record_and_tenure_together() {
        let (employee, tenure) = sample();
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&employee, &tenure).unwrap()).unwrap();
        assert_eq!(json["first_name"], "Ana");
        assert_eq!(json["employment_date"], "15.01.2020");
        assert_eq!(json["tenure"]["years"], 1);
        assert_eq!(json["tenure"]["months"], 1);
        assert_eq!(json["tenure"]["days"], 23);
    }
}
