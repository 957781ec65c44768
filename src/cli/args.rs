//! CLI argument parsing and configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::models::NavigationTab;
use crate::prototype::TimerPolicy;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// GigFlow case study - milestone auto-approval presentation
#[derive(Parser, Debug)]
#[command(name = "gigflow", version = VERSION)]
#[command(
    about = "Terminal presentation of the GigFlow milestone auto-approval case study",
    long_about = None,
    after_help = "Examples:\n  \
        gigflow                               # Start on the executive summary\n  \
        gigflow --tab prototype               # Jump straight to the widget\n  \
        gigflow --timer-policy pause-on-reject"
)]
pub struct CliArgs {
    /// Section to open first (e.g. data-analysis, prototype)
    #[arg(short, long, value_name = "TAB")]
    pub tab: Option<NavigationTab>,

    /// Countdown behaviour while a rejection is drafted
    #[arg(long, value_name = "POLICY")]
    pub timer_policy: Option<TimerPolicy>,

    /// Config file to load instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args() {
        let args = CliArgs::try_parse_from(["gigflow"]).unwrap();
        assert_eq!(args.tab, None);
        assert_eq!(args.timer_policy, None);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_all_args() {
        let args = CliArgs::try_parse_from([
            "gigflow",
            "--tab",
            "data-analysis",
            "--timer-policy",
            "pause-on-reject",
            "-c",
            "/tmp/gigflow.toml",
        ])
        .unwrap();
        assert_eq!(args.tab, Some(NavigationTab::DataAnalysis));
        assert_eq!(args.timer_policy, Some(TimerPolicy::PauseOnReject));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/gigflow.toml")));
    }

    #[test]
    fn test_unknown_tab_rejected() {
        assert!(CliArgs::try_parse_from(["gigflow", "--tab", "roadmap"]).is_err());
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(CliArgs::try_parse_from(["gigflow", "--timer-policy", "never"]).is_err());
    }
}
