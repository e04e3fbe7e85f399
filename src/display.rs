use eyre::{Result, WrapErr};
use rcard::{ReportCard, StudentRecord};
use std::fmt::{self, Write};

pub fn render_card(card: &ReportCard, student: &StudentRecord) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_card(&mut out, card, student)?;
    Ok(out)
}

fn write_card(out: &mut String, card: &ReportCard, student: &StudentRecord) -> fmt::Result {
    writeln!(out, "Report card for {}", card.name)?;
    writeln!(out)?;
    let width = student.marks.keys().map(String::len).max().unwrap_or(0);
    for (subject, mark) in &student.marks {
        writeln!(out, "  - {subject:<width$}  {mark}")?;
    }
    writeln!(out)?;
    writeln!(out, "Subjects: {}", card.subject_count)?;
    writeln!(out, "Total: {}", card.total_marks)?;
    writeln!(out, "Percentage: {:.2}%", card.percentage)?;
    writeln!(out, "Grade: {}", card.grade)?;
    writeln!(out, "Highest: {}", card.highest_subject)?;
    writeln!(out, "Lowest: {}", card.lowest_subject)?;
    writeln!(out, "Passed: {}", list(&card.passed_subjects))?;
    writeln!(out, "Failed: {}", list(&card.failed_subjects))
}

fn list(subjects: &[String]) -> String {
    if subjects.is_empty() {
        "none".to_owned()
    } else {
        subjects.join(", ")
    }
}

pub fn display_card(card: &ReportCard, student: &StudentRecord) -> Result<()> {
    print!(
        "{}",
        render_card(card, student).wrap_err("cannot render report card")?
    );
    Ok(())
}

pub fn display_toml(card: &ReportCard) -> Result<()> {
    print!(
        "{}",
        toml::to_string(card).wrap_err("cannot serialize report card")?
    );
    Ok(())
}
