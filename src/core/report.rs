//! Renders harness reports as text, JSON or CSV.

use crate::config::OutputFormat;
use crate::core::harness::{CaseReport, DemoReport, FindReport, RunReport, SuiteReport};
use crate::domain::model::{format_values, Triplet};
use crate::utils::error::Result;
use std::io::Write;

const RULE_WIDTH: usize = 40;

fn rule(c: char) -> String {
    std::iter::repeat(c).take(RULE_WIDTH).collect()
}

fn check_mark(ok: bool) -> &'static str {
    if ok {
        "✓"
    } else {
        "✗"
    }
}

fn triplets_cell(triplets: &[Triplet]) -> String {
    triplets
        .iter()
        .map(|t| {
            let [a, b, c] = t.values();
            format!("{} {} {}", a, b, c)
        })
        .collect::<Vec<_>>()
        .join(";")
}

pub fn write_suite<W: Write>(
    out: &mut W,
    report: &SuiteReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_suite_text(out, report),
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Csv => write_suite_csv(out, report),
    }
}

/// Suite followed by the demo. JSON nests both in one object and CSV
/// carries only the suite table.
pub fn write_run<W: Write>(
    out: &mut W,
    report: &RunReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            write_suite_text(out, &report.suite)?;
            writeln!(out, "\nInteractive Example:")?;
            write_demo(out, &report.demo, format)
        }
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Csv => write_suite_csv(out, &report.suite),
    }
}

pub fn write_demo<W: Write>(
    out: &mut W,
    report: &DemoReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Input: {}", format_values(&report.input))?;
            writeln!(
                out,
                "Triplets that sum to zero: {}",
                format_values(&report.triplets)
            )?;
            Ok(())
        }
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Csv => write_triplets_csv(out, &report.triplets),
    }
}

pub fn write_find<W: Write>(
    out: &mut W,
    report: &FindReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Input: {}", format_values(&report.input))?;
            writeln!(out, "Strategy: {}", report.strategy)?;
            writeln!(out, "Triplets: {}", format_values(&report.triplets))?;
            if let Some(agrees) = report.oracle_agrees {
                writeln!(out, "Strategies agree: {}", check_mark(agrees))?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Csv => write_triplets_csv(out, &report.triplets),
    }
}

fn write_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_case_text<W: Write>(out: &mut W, case: &CaseReport) -> Result<()> {
    let status = if case.passed { "✓ PASS" } else { "✗ FAIL" };

    writeln!(out, "Test {}: {}", case.index, case.description)?;
    writeln!(out, "Input: {}", format_values(&case.input))?;
    writeln!(out, "Expected: {}", format_values(&case.expected))?;
    writeln!(out, "Got: {}", format_values(&case.actual))?;
    writeln!(out, "Result: {}", status)?;
    if let Some(matched) = case.brute_force_match {
        writeln!(out, "Brute force match: {}", check_mark(matched))?;
    }
    writeln!(out, "{}", rule('-'))?;
    Ok(())
}

fn write_suite_text<W: Write>(out: &mut W, report: &SuiteReport) -> Result<()> {
    writeln!(out, "Testing Triplet Sum Solutions")?;
    writeln!(out, "{}", rule('='))?;

    for case in &report.cases {
        write_case_text(out, case)?;
    }

    writeln!(
        out,
        "Summary: {} passed, {} failed",
        report.passed, report.failed
    )?;
    if report.oracle_mismatches > 0 {
        writeln!(out, "Oracle mismatches: {}", report.oracle_mismatches)?;
    }
    Ok(())
}

fn write_suite_csv<W: Write>(out: &mut W, report: &SuiteReport) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["index", "description", "passed", "brute_force_match", "actual"])?;

    for case in &report.cases {
        let brute = case
            .brute_force_match
            .map(|m| m.to_string())
            .unwrap_or_default();
        writer.write_record([
            case.index.to_string(),
            case.description.clone(),
            case.passed.to_string(),
            brute,
            triplets_cell(&case.actual),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn write_triplets_csv<W: Write>(out: &mut W, triplets: &[Triplet]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["a", "b", "c"])?;
    for triplet in triplets {
        writer.write_record(triplet.values().iter().map(ToString::to_string))?;
    }
    writer.flush()?;
    Ok(())
}
