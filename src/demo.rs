//! The bundled demo suite. Each case is run on its own and reported with
//! its expected and actual values; the second case is wrong on purpose.

use std::fmt;

use tracing::debug;

use crate::add;

/// A named check of `add(a, b) == expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
    pub name: &'static str,
    pub a: i32,
    pub b: i32,
    pub expected: i32,
}

/// An assertion mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub expected: i32,
    pub actual: i32,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, actual {}", self.expected, self.actual)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed(Mismatch),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// Outcomes in the order the cases ran.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub results: Vec<(&'static str, Outcome)>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|(_, o)| o.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// One `test <name> ... ok|FAILED <mismatch>` line per case, then a summary.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, outcome) in &self.results {
            match outcome {
                Outcome::Passed => writeln!(f, "test {name} ... ok")?,
                Outcome::Failed(m) => writeln!(f, "test {name} ... FAILED {m}")?,
            }
        }
        let status = if self.is_success() { "ok" } else { "FAILED" };
        write!(
            f,
            "\ntest result: {status}. {} passed; {} failed",
            self.passed(),
            self.failed()
        )
    }
}

pub fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "should_return_sum_when_adding_two_numbers",
            a: 2,
            b: 3,
            expected: 5,
        },
        Case {
            name: "should_fail",
            a: 2,
            b: 3,
            expected: 50,
        },
    ]
}

pub fn run_case(case: &Case) -> Outcome {
    let actual = add(case.a, case.b);
    debug!(case = case.name, actual, expected = case.expected, "ran case");
    if actual == case.expected {
        Outcome::Passed
    } else {
        Outcome::Failed(Mismatch {
            expected: case.expected,
            actual,
        })
    }
}

/// Runs every case, even after a failure.
pub fn run(cases: &[Case]) -> Report {
    let results = cases.iter().map(|c| (c.name, run_case(c))).collect();
    Report { results }
}
