//! Command implementations for the landslide risk monitor CLI.
//!
//! Each subcommand fetches the record set once, applies the filters given
//! on the command line and prints part of the dashboard to stdout.

use clap::{Args, Subcommand, ValueEnum};
use lrm_core::{RiskLevel, DEFAULT_API_URL};
use lrm_engine::filter::{self, Choice};
use lrm_engine::Dashboard;

pub mod list;
pub mod options;
pub mod render;
pub mod source;
pub mod summary;

/// Where to fetch records from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Monitoring endpoint returning a JSON array of records
    #[arg(long, env = "LRM_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

/// The five dashboard filters. Each accepts `All`.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Region name
    #[arg(long, value_parser = filter::parse_region, default_value = "All")]
    pub region: Choice<String>,

    /// Risk level (Low, Moderate, High)
    #[arg(long, value_parser = filter::parse_risk_level, default_value = "All")]
    pub risk: Choice<RiskLevel>,

    /// Calendar year
    #[arg(long, value_parser = filter::parse_year, default_value = "All")]
    pub year: Choice<i32>,

    /// Month number, 1-12
    #[arg(long, value_parser = filter::parse_month, default_value = "All")]
    pub month: Choice<u32>,

    /// Day of month, 1-31
    #[arg(long, value_parser = filter::parse_day, default_value = "All")]
    pub day: Choice<u32>,
}

impl FilterArgs {
    /// Apply the filters the way the dashboard controls would.
    ///
    /// Day goes last because choosing a month resets it.
    pub fn apply(&self, dashboard: &mut Dashboard) {
        dashboard.set_region(self.region.clone());
        dashboard.set_risk_level(self.risk.clone());
        dashboard.set_year(self.year);
        dashboard.set_month(self.month);
        dashboard.set_day(self.day);
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Cards, as on the dashboard
    #[default]
    Text,
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the risk summary and one page of monitoring cards
    List {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Page to show (clamped to the available pages)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Activate the Nth card on the page (1-based) to focus the map on it
        #[arg(short, long)]
        select: Option<usize>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print risk counts for the filtered records
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the values each filter control offers
    Options {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::List {
            source,
            filters,
            page,
            select,
            format,
        } => list::run_list(&source.api_url, &filters, page, select, format).await,
        Command::Summary { source, filters } => {
            summary::run_summary(&source.api_url, &filters).await
        }
        Command::Options { source, filters } => {
            options::run_options(&source.api_url, &filters).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use lrm_core::Record;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn list_defaults() {
        let cli = TestCli::try_parse_from(["lrm", "list"]).unwrap();
        match cli.command {
            Command::List {
                filters,
                page,
                select,
                format,
                ..
            } => {
                assert_eq!(filters.region, Choice::All);
                assert_eq!(filters.month, Choice::All);
                assert_eq!(page, 1);
                assert_eq!(select, None);
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn filters_parse_from_flags() {
        let cli = TestCli::try_parse_from([
            "lrm", "summary", "--region", "Penang", "--risk", "High", "--year", "2024", "--month",
            "3", "--day", "All", "--api-url", "http://localhost:9/x",
        ])
        .unwrap();
        match cli.command {
            Command::Summary { source, filters } => {
                assert_eq!(source.api_url, "http://localhost:9/x");
                assert_eq!(filters.region, Choice::Only("Penang".to_string()));
                assert_eq!(filters.risk, Choice::Only(RiskLevel::High));
                assert_eq!(filters.year, Choice::Only(2024));
                assert_eq!(filters.month, Choice::Only(3));
                assert_eq!(filters.day, Choice::All);
            }
            _ => panic!("expected summary"),
        }
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        assert!(TestCli::try_parse_from(["lrm", "list", "--month", "13"]).is_err());
        assert!(TestCli::try_parse_from(["lrm", "list", "--day", "0"]).is_err());
    }

    #[test]
    fn apply_sets_day_after_month() {
        let records = Record::parse_records(
            r#"[{"regionName":"Ipoh","rainfallLevel":1,"soilSaturation":2,"slopeAngle":3,"calculatedRiskLevel":"Low","timestamp":"2024-03-15"},
                {"regionName":"Ipoh","rainfallLevel":1,"soilSaturation":2,"slopeAngle":3,"calculatedRiskLevel":"Low","timestamp":"2024-03-16"}]"#,
        )
        .unwrap();
        let mut dashboard = Dashboard::new(records);
        let filters = FilterArgs {
            region: Choice::All,
            risk: Choice::All,
            year: Choice::All,
            month: Choice::Only(3),
            day: Choice::Only(15),
        };
        filters.apply(&mut dashboard);
        assert_eq!(dashboard.filtered_len(), 1);
        assert_eq!(dashboard.filters().day, Choice::Only(15));
    }

    #[test]
    fn apply_leaves_args_intact_for_reuse() {
        let records = Record::parse_records(
            r#"[{"regionName":"Ipoh","rainfallLevel":1,"soilSaturation":2,"slopeAngle":3,"calculatedRiskLevel":"Low","timestamp":"2024-03-15"},
                {"regionName":"Ipoh","rainfallLevel":1,"soilSaturation":2,"slopeAngle":3,"calculatedRiskLevel":"High","timestamp":"2023-03-15"}]"#,
        )
        .unwrap();
        let filters = FilterArgs {
            region: Choice::Only("Ipoh".to_string()),
            risk: Choice::All,
            year: Choice::Only(2024),
            month: Choice::Only(3),
            day: Choice::Only(15),
        };
        let mut first = Dashboard::new(records.clone());
        let mut second = Dashboard::new(records);
        filters.apply(&mut first);
        filters.apply(&mut second);
        assert_eq!(first.filters(), second.filters());
        assert_eq!(second.filtered_len(), 1);
        assert_eq!(filters.year, Choice::Only(2024));
        assert_eq!(filters.day, Choice::Only(15));
    }
}
