//! Pattern analysis sections - detect repeated and sequential runs.

use super::SectionResult;
use crate::policy::{Policy, SequenceRule};
use crate::verdict::{ReasonCode, Rejection};

/// Rejects a run of `max_consecutive_repeat` identical characters.
pub fn repeat_section(candidate: &str, policy: &Policy) -> SectionResult {
    let chars: Vec<char> = candidate.chars().collect();
    let run = policy.max_consecutive_repeat();

    let repeated = chars
        .windows(run)
        .any(|window| window.iter().all(|&c| c == window[0]));

    if repeated {
        return Err(Rejection::new(
            ReasonCode::ConsecutiveRepeat,
            format!(
                "{} must not contain {} identical characters in a row",
                policy.label(),
                run
            ),
        ));
    }
    Ok(())
}

/// Rejects sequential runs according to the policy's [`SequenceRule`].
pub fn sequence_section(candidate: &str, policy: &Policy) -> SectionResult {
    let chars: Vec<char> = candidate.chars().collect();

    match policy.sequence() {
        SequenceRule::Split {
            numeric_run,
            alpha_run,
        } => {
            if has_numeric_run(&chars, numeric_run) {
                return Err(sequential_digits(policy, numeric_run));
            }
            if has_alpha_run(&chars, alpha_run) {
                return Err(sequential_alpha(policy, alpha_run));
            }
        }
        SequenceRule::Combined { run } => {
            if let Some(first) = first_ascending_run(&chars, run) {
                return Err(if first.is_ascii_digit() {
                    sequential_digits(policy, run)
                } else {
                    sequential_alpha(policy, run)
                });
            }
        }
    }
    Ok(())
}

fn sequential_digits(policy: &Policy, run: usize) -> Rejection {
    Rejection::new(
        ReasonCode::SequentialDigits,
        format!(
            "{} must not contain {} sequential digits",
            policy.label(),
            run
        ),
    )
}

fn sequential_alpha(policy: &Policy, run: usize) -> Rejection {
    Rejection::new(
        ReasonCode::SequentialAlpha,
        format!(
            "{} must not contain {} sequential letters",
            policy.label(),
            run
        ),
    )
}

/// Base-36 values stepping by exactly +1 or exactly -1. A window holding a
/// character without a value is not a run.
fn has_numeric_run(chars: &[char], run: usize) -> bool {
    chars.windows(run).any(|window| {
        let Some(values) = window
            .iter()
            .map(|c| c.to_digit(36))
            .collect::<Option<Vec<u32>>>()
        else {
            return false;
        };

        let ascending = values.windows(2).all(|w| w[1] == w[0] + 1);
        let descending = values.windows(2).all(|w| w[0] == w[1] + 1);
        ascending || descending
    })
}

/// ASCII letters ascending through the alphabet, case-insensitive.
fn has_alpha_run(chars: &[char], run: usize) -> bool {
    chars.windows(run).any(|window| {
        window.iter().all(char::is_ascii_alphabetic)
            && window.windows(2).all(|w| {
                let prev = w[0].to_ascii_lowercase() as u32;
                let curr = w[1].to_ascii_lowercase() as u32;
                curr == prev + 1
            })
    })
}

/// First character of the leftmost window whose lower-cased code points
/// ascend by exactly one.
fn first_ascending_run(chars: &[char], run: usize) -> Option<char> {
    chars
        .windows(run)
        .find(|window| {
            window.windows(2).all(|w| {
                let prev = w[0].to_ascii_lowercase() as u32;
                let curr = w[1].to_ascii_lowercase() as u32;
                curr == prev + 1
            })
        })
        .map(|window| window[0])
}
