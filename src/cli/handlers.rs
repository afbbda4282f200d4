use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::config::{Config, ConfigManager};
use crate::core::services::{
    CategoryService, ExportService, IngestService, PeriodService, SummaryService,
};
use crate::domain::{Budget, Displayable, MonthYear};
use crate::errors::BudgetError;

use super::output::{self, MessageKind};
use super::{CliError, USAGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Summary {
        input: PathBuf,
        period: Option<String>,
        json: bool,
    },
    Export {
        input: PathBuf,
        dir: PathBuf,
        period: Option<String>,
    },
    Classify {
        names: Vec<String>,
    },
    Months,
    Help,
}

impl Command {
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Command::Help);
        };
        match name.as_str() {
            "summary" => {
                let (positional, period, json) = split_options(rest)?;
                let [input] = positional.as_slice() else {
                    return Err(usage("summary expects exactly one input file"));
                };
                Ok(Command::Summary {
                    input: PathBuf::from(input),
                    period,
                    json,
                })
            }
            "export" => {
                let (positional, period, json) = split_options(rest)?;
                if json {
                    return Err(usage("export does not support --json"));
                }
                let [input, dir] = positional.as_slice() else {
                    return Err(usage("export expects an input file and a directory"));
                };
                Ok(Command::Export {
                    input: PathBuf::from(input),
                    dir: PathBuf::from(dir),
                    period,
                })
            }
            "classify" if !rest.is_empty() => Ok(Command::Classify {
                names: rest.to_vec(),
            }),
            "classify" => Err(usage("classify expects at least one name")),
            "months" => Ok(Command::Months),
            "help" | "--help" | "-h" => Ok(Command::Help),
            other => Err(usage(&format!("unknown command `{other}`"))),
        }
    }
}

fn usage(message: &str) -> CliError {
    CliError::Usage(format!("{message}\n\n{USAGE}"))
}

fn split_options(args: &[String]) -> Result<(Vec<String>, Option<String>, bool), CliError> {
    let mut positional = Vec::new();
    let mut period = None;
    let mut json = false;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--period" => {
                let value = iter
                    .next()
                    .ok_or_else(|| usage("--period expects a value such as 03-2025"))?;
                period = Some(value.clone());
            }
            flag if flag.starts_with("--") => {
                return Err(usage(&format!("unknown option `{flag}`")));
            }
            _ => positional.push(arg.clone()),
        }
    }
    Ok((positional, period, json))
}

pub(super) fn execute(command: Command) -> Result<(), CliError> {
    match command {
        Command::Summary {
            input,
            period,
            json,
        } => {
            let config = load_config()?;
            let budget = load_budget(&input, period.as_deref(), &config)?;
            let overview = SummaryService::overview(&budget, &config);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&overview).map_err(BudgetError::from)?
                );
                return Ok(());
            }

            output::section(format!("Budget {}", overview.period));
            println!("Total budget:  {}", overview.formatted.total_budget);
            println!("Total spent:   {}", overview.formatted.total_spent);
            println!("Remaining:     {}", overview.formatted.total_remaining);
            println!(
                "Used:          {} ({})",
                overview.formatted.percent_used, overview.summary.status
            );

            if !overview.categories.is_empty() {
                output::section("Categories");
                for view in &overview.categories {
                    println!(
                        "{:<32} {:>14} / {:<14} {:>5}",
                        view.record.display_label(),
                        view.formatted_spent,
                        view.formatted_allotted,
                        view.progress.label()
                    );
                }
            }

            output::section("Insights");
            for insight in &overview.insights {
                output::print(MessageKind::from(insight.kind), &insight.message);
            }
            Ok(())
        }
        Command::Export { input, dir, period } => {
            let config = load_config()?;
            let budget = load_budget(&input, period.as_deref(), &config)?;
            let path = ExportService::write_to_dir(&budget, &dir)?;
            output::print(
                MessageKind::Success,
                format!("Exported budget to {}", path.display()),
            );
            Ok(())
        }
        Command::Classify { names } => {
            for name in names {
                let kind = CategoryService::classify(&name);
                println!("{name}: {kind} {}", kind.color());
            }
            Ok(())
        }
        Command::Months => {
            for month in PeriodService::available_months(Local::now().date_naive()) {
                println!("{}  {}", month.to_api_string(), month.label());
            }
            Ok(())
        }
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
    }
}

fn load_config() -> Result<Config, CliError> {
    Ok(ConfigManager::new()?.load()?)
}

fn load_budget(path: &Path, period: Option<&str>, config: &Config) -> Result<Budget, CliError> {
    let period: MonthYear = PeriodService::resolve(period)?;
    let json = fs::read_to_string(path).map_err(BudgetError::from)?;
    Ok(IngestService::budget_from_json(
        &json,
        period,
        config.currency.clone(),
    )?)
}
