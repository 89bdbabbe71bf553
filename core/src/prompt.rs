//! Amount entry during toggle and edit.

/// Asks the user for an amount.
///
/// Returns the raw answer, or `None` when the user cancelled. An empty
/// string is an answer, not a cancel.
pub trait AmountPrompt {
    fn ask(&mut self, message: &str, current: Option<f64>) -> Option<String>;
}

impl<F> AmountPrompt for F
where
    F: FnMut(&str, Option<f64>) -> Option<String>,
{
    fn ask(&mut self, message: &str, current: Option<f64>) -> Option<String> {
        self(message, current)
    }
}

/// Interpret a prompt answer as an amount.
///
/// Anything that is not a finite, non-negative number resolves to absent.
pub fn parse_amount(answer: &str) -> Option<f64> {
    answer
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
}
