//! Campaign orchestration.

use std::collections::BTreeMap;
use std::panic;
use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::error::Result;
use crate::generate::{
    DirSpec, materialize_dir, materialize_file, random_data_load_text, random_date,
    random_logging_text, random_source_text, random_string,
};
use crate::invoke::invoke;
use crate::report::{Reporter, RunReport};
use crate::targets::{DateArg, NameArg, PathArg, TargetSuite, mining};

/// Default random iterations per campaign.
pub const DEFAULT_ITERATIONS: usize = 20;

/// Number of campaigns in a run.
pub const CAMPAIGN_COUNT: usize = 5;

/// Nonexistent-path probes appended to the file-reading campaigns.
const NONEXISTENT_PROBES: usize = 5;

/// Harness configuration.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Random iterations per campaign. The fixed edge-case corpora run
    /// in addition to these.
    pub iterations: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Progress notification emitted once per campaign, before it runs.
#[derive(Debug, Clone)]
pub struct CampaignInfo {
    /// 1-based campaign index.
    pub index: usize,
    /// Total number of campaigns.
    pub count: usize,
    /// Name of the target operation under test.
    pub target: &'static str,
    /// Random iterations this campaign will run.
    pub iterations: usize,
}

/// The fuzzing harness: drives five campaigns, one per target operation,
/// funnelling every outcome through the fault boundary into the reporter.
pub struct Harness {
    config: HarnessConfig,
    targets: TargetSuite,
}

impl Harness {
    /// Create a harness with default configuration.
    ///
    /// Fails when the target suite cannot be loaded; that failure is
    /// fatal and no campaign runs.
    pub fn new() -> Result<Self> {
        Self::with_config(HarnessConfig::default())
    }

    /// Create a harness with custom configuration.
    pub fn with_config(config: HarnessConfig) -> Result<Self> {
        Ok(Self {
            config,
            targets: TargetSuite::load()?,
        })
    }

    /// Run all campaigns sequentially and produce the final report.
    ///
    /// `progress` is called once per campaign as it starts. Target
    /// failures never escape; an error from this function means the
    /// harness itself failed (e.g. temp-file creation), which is a
    /// defect in the harness, not a finding about a target.
    ///
    /// There is no timeout around invocations: a target that never
    /// returns hangs the run.
    pub fn run(&self, progress: impl FnMut(&CampaignInfo)) -> Result<RunReport> {
        let mut reporter = Reporter::new();

        // Targets may panic; keep the default hook from spraying the
        // console while the fault boundary does its job.
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        let result = self.run_campaigns(&mut reporter, progress);
        panic::set_hook(prev_hook);
        result?;

        Ok(reporter.finalize())
    }

    fn run_campaigns(
        &self,
        reporter: &mut Reporter,
        mut progress: impl FnMut(&CampaignInfo),
    ) -> Result<()> {
        let campaigns: [(&'static str, fn(&Self, &mut Reporter) -> Result<()>); CAMPAIGN_COUNT] = [
            ("parse", Self::fuzz_parse),
            ("check_logging_usage", Self::fuzz_logging_usage),
            ("days_between", Self::fuzz_days_between),
            ("count_source_files", Self::fuzz_file_count),
            ("count_data_loads", Self::fuzz_data_loads),
        ];

        for (i, (target, campaign)) in campaigns.iter().enumerate() {
            progress(&CampaignInfo {
                index: i + 1,
                count: CAMPAIGN_COUNT,
                target,
                iterations: self.config.iterations,
            });
            campaign(self, reporter)?;
        }
        Ok(())
    }

    /// Campaign 1: the source parser, on materialized random source text
    /// plus nonexistent paths.
    fn fuzz_parse(&self, reporter: &mut Reporter) -> Result<()> {
        for _ in 0..self.config.iterations {
            let code = random_source_text();
            let file = materialize_file(&code)?;
            let input = format!(
                "file: {}, content: {}",
                file.path().display(),
                preview(&code)
            );
            reporter.log(invoke("parse", &input, || {
                self.targets.parser.parse(file.path())
            }));
        }

        for _ in 0..NONEXISTENT_PROBES {
            let fake = format!("/nonexistent/{}.py", random_string(None));
            let input = format!("file: {fake}");
            reporter.log(invoke("parse", &input, || {
                self.targets.parser.parse(Path::new(&fake))
            }));
        }
        Ok(())
    }

    /// Campaign 2: the logging-usage checker, on parse output plus a
    /// curated set of tracked names including null-like and wrong-typed
    /// values. The parse and the check share one fault boundary.
    fn fuzz_logging_usage(&self, reporter: &mut Reporter) -> Result<()> {
        for _ in 0..self.config.iterations {
            let code = random_logging_text();
            let file = materialize_file(&code)?;
            let name = match fastrand::usize(0..6) {
                0 => NameArg::Text("data".to_string()),
                1 => NameArg::Text("test_var".to_string()),
                2 => NameArg::Text(random_string(Some(10))),
                3 => NameArg::Text(String::new()),
                4 => NameArg::Null,
                _ => NameArg::Number(123),
            };
            let input = format!("name: {name}, code: {}", preview(&code));
            reporter.log(invoke("check_logging_usage", &input, || {
                let parsed = self.targets.parser.parse(file.path())?;
                self.targets.parser.check_logging_usage(&parsed, &name)
            }));
        }
        Ok(())
    }

    /// Campaign 3: the date-delta calculator, on random date pairs plus
    /// null-like, wrong-typed, extreme-range, and identical-pair edges.
    fn fuzz_days_between(&self, reporter: &mut Reporter) -> Result<()> {
        for _ in 0..self.config.iterations {
            let d1 = DateArg::Date(random_date());
            let d2 = DateArg::Date(random_date());
            self.log_days_between(reporter, d1, d2);
        }

        let today = Local::now().date_naive();
        let edge_cases = [
            (DateArg::Null, DateArg::Null),
            (DateArg::Date(today), DateArg::Null),
            (DateArg::Null, DateArg::Date(today)),
            (
                DateArg::Text("2020-01-01".to_string()),
                DateArg::Text("2021-01-01".to_string()),
            ),
            (DateArg::Number(123), DateArg::Number(456)),
            (DateArg::List(Vec::new()), DateArg::Map(BTreeMap::new())),
            (ymd(1900, 1, 1), ymd(2100, 12, 31)),
            (DateArg::Date(today), DateArg::Date(today)),
        ];
        for (d1, d2) in edge_cases {
            self.log_days_between(reporter, d1, d2);
        }
        Ok(())
    }

    fn log_days_between(&self, reporter: &mut Reporter, d1: DateArg, d2: DateArg) {
        let input = format!("d1: {d1}, d2: {d2}");
        reporter.log(invoke("days_between", &input, || {
            mining::days_between(&d1, &d2)
        }));
    }

    /// Campaign 4: the source-file counter, on freshly populated temp
    /// directories plus invalid paths. The independently computed
    /// expected count goes into the input label; a disagreement from the
    /// target is data for the report, not a harness failure.
    fn fuzz_file_count(&self, reporter: &mut Reporter) -> Result<()> {
        for _ in 0..self.config.iterations {
            let spec = DirSpec::random();
            let dir = materialize_dir(&spec)?;
            let arg = PathArg::path(dir.path());
            let input = format!(
                "dir: {}, source: {}, other: {}, notebooks: {}, expected: {}",
                dir.path().display(),
                spec.source_files,
                spec.other_files,
                spec.notebook_files,
                spec.expected_count()
            );
            reporter.log(invoke("count_source_files", &input, || {
                mining::count_source_files(&arg)
            }));
        }

        let edge_cases = [
            PathArg::path("/nonexistent/directory"),
            PathArg::path(""),
            PathArg::Null,
            PathArg::path(random_string(None)),
            PathArg::path("../../../etc"),
            PathArg::path("/dev/null"),
        ];
        for arg in edge_cases {
            let input = format!("dir: {arg}");
            reporter.log(invoke("count_source_files", &input, || {
                mining::count_source_files(&arg)
            }));
        }
        Ok(())
    }

    /// Campaign 5: the data-load counter, on materialized loader-heavy
    /// source text plus nonexistent paths.
    fn fuzz_data_loads(&self, reporter: &mut Reporter) -> Result<()> {
        for _ in 0..self.config.iterations {
            let code = random_data_load_text();
            let file = materialize_file(&code)?;
            let input = format!(
                "file: {}, code: {}",
                file.path().display(),
                preview(&code)
            );
            reporter.log(invoke("count_data_loads", &input, || {
                self.targets.lint.count_data_loads(file.path())
            }));
        }

        for _ in 0..NONEXISTENT_PROBES {
            let fake = format!("/nonexistent/{}.py", random_string(None));
            let input = format!("file: {fake}");
            reporter.log(invoke("count_data_loads", &input, || {
                self.targets.lint.count_data_loads(Path::new(&fake))
            }));
        }
        Ok(())
    }
}

/// Short single-line preview of generated content for provenance labels.
fn preview(s: &str) -> String {
    s.chars().take(50).collect::<String>().replace('\n', "\\n")
}

fn ymd(y: i32, m: u32, d: u32) -> DateArg {
    DateArg::Date(NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date"))
}
