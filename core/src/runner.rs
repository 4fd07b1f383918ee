//! Sequential scenario runner and its report.

use std::fmt;
use std::time::Duration;

use crate::assert;
use crate::error::ScenarioError;
use crate::http::Transport;
use crate::scenarios::Scenario;

/// Result of one scenario.
#[derive(Debug)]
pub struct Outcome {
    pub name: &'static str,
    /// Response time on success.
    pub result: Result<Duration, ScenarioError>,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<Outcome>,
}

impl RunReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(elapsed) => writeln!(f, "PASS {} ({} ms)", outcome.name, elapsed.as_millis())?,
                Err(err) => writeln!(f, "FAIL {}: {err}", outcome.name)?,
            }
        }
        write!(
            f,
            "{} scenarios, {} passed, {} failed",
            self.outcomes.len(),
            self.passed(),
            self.failed()
        )
    }
}

/// Execute one scenario: a single request, then every expectation.
pub fn run_scenario(transport: &dyn Transport, scenario: &Scenario) -> Result<Duration, ScenarioError> {
    let response = transport.execute(&scenario.request)?;
    assert::verify(&response, &scenario.expectations).map_err(ScenarioError::Checks)?;
    Ok(response.elapsed)
}

/// Run `scenarios` in order. A failing scenario never stops the run.
pub fn run(transport: &dyn Transport, scenarios: &[Scenario]) -> RunReport {
    let outcomes = scenarios
        .iter()
        .map(|scenario| {
            let result = run_scenario(transport, scenario);
            match &result {
                Ok(elapsed) => tracing::info!(
                    scenario = scenario.name,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "passed"
                ),
                Err(err) => tracing::error!(scenario = scenario.name, error = %err, "failed"),
            }
            Outcome {
                name: scenario.name,
                result,
            }
        })
        .collect();
    RunReport { outcomes }
}
