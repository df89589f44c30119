use anyhow::Result;
use colored::Colorize;
use monty_game::numbers::round_hundredths;
use monty_game::{Outcome, Strategy};
use std::io::Write;
use std::time::Duration;

use super::acceptance::expected_win_rate;
use super::runner::SeedRun;

pub fn generate_console_report(
    writer: &mut dyn Write,
    runs: &[SeedRun],
    total_duration: Duration,
) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "📊 Stay vs Switch Summary".bright_cyan().bold())?;
    writeln!(writer, "{}", "=========================".cyan())?;

    for run in runs {
        writeln!(
            writer,
            "{} seed {} ({} trials, {:?}, {:?})",
            "🎲".bold(),
            run.seed.to_string().bold(),
            run.trials,
            run.execution,
            run.duration
        )?;
        writeln!(writer, "   {:<8} {:>6} {:>6}", "strategy", "win", "lose")?;
        for row in run.table.rows() {
            let win = format!("{:.2}", round_hundredths(row.win_rate));
            let win = if row.win_rate >= 0.5 {
                win.green()
            } else {
                win.red()
            };
            writeln!(
                writer,
                "   {:<8} {:>6} {:>6.2}",
                row.strategy.label(),
                win,
                round_hundredths(row.lose_rate)
            )?;
        }
        let advantage = run.table.proportion(Strategy::Switch, Outcome::Win)
            - run.table.proportion(Strategy::Stay, Outcome::Win);
        writeln!(writer, "   switch advantage: {advantage:+.2}")?;
        writeln!(writer)?;
    }

    writeln!(
        writer,
        "Expected: stay {:.2}, switch {:.2}",
        expected_win_rate(Strategy::Stay),
        expected_win_rate(Strategy::Switch)
    )?;
    writeln!(writer, "Total time: {total_duration:?}")?;
    Ok(())
}

pub fn generate_json_report(writer: &mut dyn Write, runs: &[SeedRun]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(runs)?;
    writeln!(writer, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(writer: &mut dyn Write, runs: &[SeedRun]) -> Result<()> {
    writeln!(writer, "# Monty Hall Simulation Results\n")?;

    for run in runs {
        writeln!(writer, "## Seed {}\n", run.seed)?;
        writeln!(writer, "- **Trials**: {}", run.trials)?;
        writeln!(writer, "- **Execution**: {:?}\n", run.execution)?;
        writeln!(writer, "| Strategy | Win | Lose |")?;
        writeln!(writer, "|----------|-----|------|")?;
        for row in run.table.rows() {
            writeln!(
                writer,
                "| {} | {:.2} | {:.2} |",
                row.strategy.label(),
                round_hundredths(row.win_rate),
                round_hundredths(row.lose_rate)
            )?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

pub fn generate_csv_report(writer: &mut dyn Write, runs: &[SeedRun]) -> Result<()> {
    writeln!(
        writer,
        "seed,trials,execution,strategy,wins,losses,win_rate,lose_rate"
    )?;
    for run in runs {
        let execution = format!("{:?}", run.execution).to_lowercase();
        for row in run.table.rows() {
            writeln!(
                writer,
                "{},{},{},{},{},{},{:.2},{:.2}",
                run.seed,
                run.trials,
                execution,
                row.strategy.label(),
                row.wins,
                row.losses,
                round_hundredths(row.win_rate),
                round_hundredths(row.lose_rate)
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::runner::{BatchRunner, Execution};

    fn sample_runs() -> Vec<SeedRun> {
        BatchRunner::new(120, Execution::Sequential, false)
            .run_all(&[11, 12])
            .unwrap()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn console_report_lists_both_strategies() {
        let runs = sample_runs();
        let out = render(|w| generate_console_report(w, &runs, Duration::from_millis(5)));
        assert!(out.contains("Stay vs Switch Summary"));
        assert!(out.contains("stay"));
        assert!(out.contains("switch advantage"));
        assert!(out.contains("seed"));
    }

    #[test]
    fn json_report_roundtrips() {
        let runs = sample_runs();
        let out = render(|w| generate_json_report(w, &runs));
        let parsed: Vec<SeedRun> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].table, runs[0].table);
        assert_eq!(parsed[1].execution, Execution::Sequential);
    }

    #[test]
    fn markdown_report_has_table_per_seed() {
        let runs = sample_runs();
        let out = render(|w| generate_markdown_report(w, &runs));
        assert!(out.starts_with("# Monty Hall Simulation Results"));
        assert_eq!(out.matches("| Strategy | Win | Lose |").count(), 2);
    }

    #[test]
    fn csv_report_has_row_per_strategy_and_seed() {
        let runs = sample_runs();
        let out = render(|w| generate_csv_report(w, &runs));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1 + 2 * 2);
        assert!(lines[1].starts_with("11,120,sequential,stay,"));
        assert!(lines[2].starts_with("11,120,sequential,switch,"));
    }
}
