use anyhow::Result;
use check_parser::RuleSet;
use check_validator::RunReport;
use colored::*;
use serde_json::json;

pub fn print_run_report(rules: &RuleSet, report: &RunReport, format: &str) -> Result<()> {
    match format {
        "json" => print_json_report(rules, report),
        _ => {
            print_text_report(rules, report);
            Ok(())
        }
    }
}

fn rule_kind(rules: &RuleSet, index: usize) -> &'static str {
    rules.checks.get(index).map_or("check", |rule| rule.kind())
}

fn print_text_report(rules: &RuleSet, report: &RunReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  CHECK REPORT".bold());
    println!("{}", "═".repeat(60));

    if let Some(name) = &rules.name {
        println!("\n  Rule set: {}", name);
    }
    if let Some(description) = &rules.description {
        println!("  {}", description);
    }

    if report.passed {
        println!("\n{} {}", "✓".green().bold(), "Checks PASSED".green().bold());
    } else {
        println!("\n{} {}", "✗".red().bold(), "Checks FAILED".red().bold());
    }

    if !report.failures.is_empty() {
        println!("\n{}", "Failures:".red().bold());
        for (i, failure) in report.failures.iter().enumerate() {
            println!(
                "  {}. [#{} {}] {}",
                i + 1,
                failure.index + 1,
                rule_kind(rules, failure.index),
                failure.error.to_string().red()
            );
        }
    }

    let stats = &report.stats;
    println!("\n{}", "Summary:".bold());
    println!("  Total checks:   {}", stats.checks_total);
    println!("  Evaluated:      {}", stats.checks_evaluated);
    println!("  Failures:       {}", stats.failures);
    println!("  Duration:       {} ms", stats.duration_ms);
    println!("{}", "═".repeat(60));
}

fn print_json_report(rules: &RuleSet, report: &RunReport) -> Result<()> {
    let failures: Vec<_> = report
        .failures
        .iter()
        .map(|failure| {
            json!({
                "index": failure.index,
                "type": rule_kind(rules, failure.index),
                "message": failure.error.to_string(),
            })
        })
        .collect();

    let output = json!({
        "name": rules.name,
        "passed": report.passed,
        "failures": failures,
        "summary": {
            "checks_total": report.stats.checks_total,
            "checks_evaluated": report.stats.checks_evaluated,
            "failures": report.stats.failures,
            "duration_ms": report.stats.duration_ms,
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}
