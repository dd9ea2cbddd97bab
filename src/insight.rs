//! Rule-based insight generation.
//!
//! The generator walks a fixed, ordered table of threshold rules over the
//! normalized impacts and selected node scores, collects the message of every
//! rule that fires, and keeps the first four in declaration order. This is a
//! priority-by-declaration policy, deliberately not a severity ranking: two
//! rules firing at very different magnitudes still appear in table order, and
//! rules past the fourth fired one are truncated rather than re-ranked.
//!
//! When no rule fires the result is exactly one fallback message describing a
//! stable equilibrium.

use crate::input::Impacts;
use crate::node::NodeScores;

/// Maximum number of insight messages returned per evaluation.
pub const MAX_INSIGHTS: usize = 4;

/// Fallback message returned when no rule fires.
pub const EQUILIBRIUM_MESSAGE: &str =
    "Key economic variables remain in a relatively stable equilibrium.";

/// One threshold rule: a predicate over impacts/scores and its message.
struct Rule {
    applies: fn(&Impacts, &NodeScores) -> bool,
    message: &'static str,
}

/// The fixed rule table, in declaration (priority) order.
const RULES: [Rule; 6] = [
    Rule {
        applies: |n, _| n.unemployment > 0.2,
        message: "Rising unemployment cuts household income and can sharply depress consumption.",
    },
    Rule {
        applies: |n, _| n.employment > 0.2,
        message: "Strong employment readings lift confidence, encouraging investment and consumption.",
    },
    Rule {
        applies: |_, s| s.interest > 0.5,
        message: "High interest rates raise debt-service burdens, pressuring real estate and equity markets.",
    },
    Rule {
        applies: |_, s| s.price > 0.5,
        message: "Sustained price increases erode real purchasing power and raise the risk of a slowdown.",
    },
    Rule {
        applies: |_, s| s.exchange > 0.5,
        message: "A weaker currency is a tailwind for exporters but can push import prices higher.",
    },
    Rule {
        applies: |_, s| s.stock < -0.5,
        message: "Earnings and liquidity concerns have reduced the appeal of the equity market.",
    },
];

/// Number of rules in the fixed table. Exposed for tests and UI affordances.
pub const RULE_COUNT: usize = RULES.len();

/// Generate the ordered insight list for one evaluation.
///
/// Pure and deterministic. The returned list holds between one and
/// [`MAX_INSIGHTS`] messages: the first four fired rules in table order, or
/// the single [`EQUILIBRIUM_MESSAGE`] when none fire.
///
/// # Examples
///
/// ```
/// use macroflow::engine::propagate;
/// use macroflow::input::InputVector;
/// use macroflow::insight::{generate, EQUILIBRIUM_MESSAGE};
///
/// let input = InputVector::default();
/// let insights = generate(&input.impacts(), &propagate(&input));
/// assert_eq!(insights, vec![EQUILIBRIUM_MESSAGE.to_string()]);
/// ```
#[must_use]
pub fn generate(impacts: &Impacts, scores: &NodeScores) -> Vec<String> {
    let fired: Vec<String> = RULES
        .iter()
        .filter(|rule| (rule.applies)(impacts, scores))
        .take(MAX_INSIGHTS)
        .map(|rule| rule.message.to_string())
        .collect();

    if fired.is_empty() {
        vec![EQUILIBRIUM_MESSAGE.to_string()]
    } else {
        fired
    }
}
