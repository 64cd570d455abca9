use anyhow::Context;
use clap::Parser;
use std::io::Write;
use triplet_sum::core::harness::{builtin_cases, demo, RunReport, SelfTest};
use triplet_sum::core::report;
use triplet_sum::utils::{logger, validation::Validate};
use triplet_sum::{BruteForceFinder, CaseFile, CliConfig, Command, TripletError};
use triplet_sum::{TestCase, TwoPointerFinder};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e, 1);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let format = config.format;

    match config.command {
        None => {
            let run = RunReport {
                suite: SelfTest::new().run("builtin", &builtin_cases()),
                demo: demo(),
            };
            report::write_run(&mut out, &run, format).context("writing suite report")?;
        }
        Some(Command::Demo) => {
            report::write_demo(&mut out, &demo(), format).context("writing demo")?;
        }
        Some(Command::Find {
            nums,
            brute_force,
            compare,
        }) => {
            let find_report = if brute_force {
                SelfTest::with_finders(BruteForceFinder, TwoPointerFinder).find(&nums, compare)
            } else {
                SelfTest::new().find(&nums, compare)
            };
            if find_report.oracle_agrees == Some(false) {
                tracing::warn!("strategies disagree on {:?}", nums);
            }
            report::write_find(&mut out, &find_report, format).context("writing result")?;
        }
        Some(Command::SelfTest {
            cases,
            brute_force_max_len,
            strict,
        }) => {
            let (name, test_cases, file_max_len) = match cases {
                Some(path) => {
                    tracing::info!("📁 Loading cases from: {}", path);
                    match load_cases(&path) {
                        Ok(loaded) => loaded,
                        Err(e) => exit_with(&e, 1),
                    }
                }
                None => ("builtin".to_string(), builtin_cases(), None),
            };

            let max_len = brute_force_max_len
                .or(file_max_len)
                .unwrap_or(triplet_sum::core::harness::DEFAULT_BRUTE_FORCE_MAX_LEN);

            let suite = SelfTest::new()
                .brute_force_max_len(max_len)
                .run(&name, &test_cases);
            report::write_suite(&mut out, &suite, format).context("writing suite report")?;
            out.flush()?;

            if strict && !suite.all_passed() {
                tracing::error!(
                    "❌ {} case(s) failed, {} oracle mismatch(es)",
                    suite.failed,
                    suite.oracle_mismatches
                );
                std::process::exit(2);
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn load_cases(path: &str) -> triplet_sum::Result<(String, Vec<TestCase>, Option<usize>)> {
    let file = CaseFile::from_file(path)?;
    let name = file.suite.name.clone();
    let max_len = file.suite.brute_force_max_len;
    let cases = file.into_cases()?;
    Ok((name, cases, max_len))
}

fn exit_with(e: &TripletError, code: i32) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(code);
}
