//! Verification result reporter — formats PASS/FAIL output and prints a summary.

use workshop_contract::interaction::Interaction;

use crate::runner::RunResult;

pub struct Reporter {
    passed: usize,
    failed: usize,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    pub fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
        }
    }

    pub fn record(&mut self, interaction: &Interaction, result: RunResult) {
        let given = interaction
            .given
            .as_deref()
            .map(|g| format!(" (given {g})"))
            .unwrap_or_default();
        if result.passed() {
            self.passed += 1;
            println!(
                "PASS  [{}/{}] {}{given}",
                interaction.service, interaction.id, interaction.description
            );
            return;
        }

        self.failed += 1;
        println!(
            "FAIL  [{}/{}] {}{given}",
            interaction.service, interaction.id, interaction.description
        );
        if let Some(err) = &result.error {
            println!("        error: {err}");
            return;
        }
        if let Some(actual) = result.actual_status {
            if actual != result.expected_status {
                println!(
                    "        {} {} → expected {}, got {}",
                    interaction.request.method,
                    interaction.request.path,
                    result.expected_status,
                    actual
                );
            }
        }
        for mismatch in &result.header_mismatches {
            println!("        header: {mismatch}");
        }
        for mismatch in &result.body_mismatches {
            println!("        {mismatch}");
        }
    }

    pub fn print_summary(&self) {
        println!();
        println!("────────────────────────────────────────────────────");
        println!("Results: {} passed, {} failed", self.passed, self.failed);
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
