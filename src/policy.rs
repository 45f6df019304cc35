//! Validation policies
//!
//! A [`Policy`] is the immutable parameter set one classifier instance runs
//! with. The allowed-character pattern is compiled when the policy is built
//! and never changes afterwards, so a policy can be shared freely.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static ACCOUNT: LazyLock<Policy> = LazyLock::new(|| {
    Policy::builder("Account")
        .length(6, 15)
        .blank_is_empty(true)
        .max_consecutive_repeat(4)
        .sequence(SequenceRule::Split {
            numeric_run: 4,
            alpha_run: 5,
        })
        .build()
        .expect("account policy is valid")
});

static PASSWORD: LazyLock<Policy> = LazyLock::new(|| {
    Policy::builder("Password")
        .length(8, 20)
        .symbols("-_.$")
        .max_consecutive_repeat(4)
        .sequence(SequenceRule::Combined { run: 4 })
        .build()
        .expect("password policy is valid")
});

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Minimum length must be at least 1")]
    ZeroMinLength,
    #[error("Minimum length {min} exceeds maximum length {max}")]
    InvertedLength { min: usize, max: usize },
    #[error("Run length for {rule} must be at least 2, got {run}")]
    RunTooShort { rule: &'static str, run: usize },
    #[error("Allowed symbol {0:?} is not ASCII punctuation")]
    InvalidSymbol(char),
    #[error("Failed to compile character pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// How sequential runs are detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceRule {
    /// Numeric check first: every character takes its base-36 value
    /// (`0`-`9`, then `a`/`A` = 10 through `z`/`Z` = 35) and a window of
    /// `numeric_run` values stepping by +1 or by -1 is rejected. Then a
    /// window of `alpha_run` letters ascending through the alphabet,
    /// ignoring case, is rejected.
    Split { numeric_run: usize, alpha_run: usize },
    /// One ascending scan over lower-cased code points. Descending runs
    /// pass.
    Combined { run: usize },
}

#[derive(Debug, Clone)]
pub struct Policy {
    label: String,
    min_length: usize,
    max_length: usize,
    symbols: String,
    blank_is_empty: bool,
    max_consecutive_repeat: usize,
    sequence: SequenceRule,
    pattern: Regex,
}

impl Policy {
    pub fn builder(label: impl Into<String>) -> PolicyBuilder {
        PolicyBuilder::new(label)
    }

    /// Account names: 6-15 letters or digits.
    pub fn account() -> &'static Policy {
        &ACCOUNT
    }

    /// Passwords: 8-20 letters, digits or `- _ . $`.
    pub fn password() -> &'static Policy {
        &PASSWORD
    }

    /// Capitalized subject used at the start of every message.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Punctuation allowed in addition to ASCII letters and digits.
    pub fn symbols(&self) -> &str {
        &self.symbols
    }

    pub fn blank_is_empty(&self) -> bool {
        self.blank_is_empty
    }

    pub fn max_consecutive_repeat(&self) -> usize {
        self.max_consecutive_repeat
    }

    pub fn sequence(&self) -> SequenceRule {
        self.sequence
    }

    /// True when every character of `candidate` is allowed.
    pub fn matches_charset(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }

    /// Human-readable list of the allowed characters.
    pub fn describe_charset(&self) -> String {
        if self.symbols.is_empty() {
            "letters and digits".to_string()
        } else {
            let symbols: Vec<String> = self.symbols.chars().map(String::from).collect();
            format!("letters, digits and the symbols {}", symbols.join(" "))
        }
    }
}

/// Builder for custom policies. Defaults: length 6-20, letters and digits
/// only, runs of 4 for both repeats and sequences.
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    label: String,
    min_length: usize,
    max_length: usize,
    symbols: String,
    blank_is_empty: bool,
    max_consecutive_repeat: usize,
    sequence: SequenceRule,
}

impl PolicyBuilder {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            min_length: 6,
            max_length: 20,
            symbols: String::new(),
            blank_is_empty: false,
            max_consecutive_repeat: 4,
            sequence: SequenceRule::Combined { run: 4 },
        }
    }

    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn symbols(mut self, symbols: impl Into<String>) -> Self {
        self.symbols = symbols.into();
        self
    }

    pub fn blank_is_empty(mut self, blank_is_empty: bool) -> Self {
        self.blank_is_empty = blank_is_empty;
        self
    }

    pub fn max_consecutive_repeat(mut self, run: usize) -> Self {
        self.max_consecutive_repeat = run;
        self
    }

    pub fn sequence(mut self, rule: SequenceRule) -> Self {
        self.sequence = rule;
        self
    }

    /// Validates the parameters and compiles the character pattern.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the minimum length is zero or above the maximum
    /// - any run length is below 2
    /// - a symbol is not ASCII punctuation
    pub fn build(self) -> Result<Policy, PolicyError> {
        if self.min_length == 0 {
            return Err(PolicyError::ZeroMinLength);
        }
        if self.min_length > self.max_length {
            return Err(PolicyError::InvertedLength {
                min: self.min_length,
                max: self.max_length,
            });
        }

        check_run("consecutive repeat", self.max_consecutive_repeat)?;
        match self.sequence {
            SequenceRule::Split {
                numeric_run,
                alpha_run,
            } => {
                check_run("numeric sequence", numeric_run)?;
                check_run("alphabetic sequence", alpha_run)?;
            }
            SequenceRule::Combined { run } => check_run("sequence", run)?,
        }

        if let Some(c) = self.symbols.chars().find(|c| !c.is_ascii_punctuation()) {
            return Err(PolicyError::InvalidSymbol(c));
        }

        let pattern = Regex::new(&format!(
            "^[A-Za-z0-9{}]+$",
            regex::escape(&self.symbols)
        ))?;

        Ok(Policy {
            label: self.label,
            min_length: self.min_length,
            max_length: self.max_length,
            symbols: self.symbols,
            blank_is_empty: self.blank_is_empty,
            max_consecutive_repeat: self.max_consecutive_repeat,
            sequence: self.sequence,
            pattern,
        })
    }
}

fn check_run(rule: &'static str, run: usize) -> Result<(), PolicyError> {
    if run < 2 {
        return Err(PolicyError::RunTooShort { rule, run });
    }
    Ok(())
}
