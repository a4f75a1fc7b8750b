//! Provider verification: replay contract interactions against a provider.

pub mod config;
pub mod fixture;
pub mod reporter;
pub mod runner;
pub mod services;

use workshop_contract::interaction::Interaction;

use crate::reporter::Reporter;
use crate::runner::Runner;

/// Run every interaction in order and collect the results.
pub async fn verify(runner: &Runner, interactions: &[Interaction]) -> Reporter {
    let mut reporter = Reporter::new();
    for interaction in interactions {
        let result = runner.run(interaction).await;
        reporter.record(interaction, result);
    }
    reporter.print_summary();
    reporter
}
