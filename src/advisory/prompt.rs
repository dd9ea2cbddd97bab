//! Prompt construction for the advisory collaborator.
//!
//! The prompt carries the eight input deltas as a structured, signed list plus
//! the framing the narrative should follow. Providers send it verbatim; the
//! reply is treated as opaque display text.

use crate::input::InputVector;

/// Persona preamble shared by providers that support a system prompt.
pub const PREAMBLE: &str = "You are a seasoned macroeconomist and veteran fund manager. \
Explain clearly enough for a beginner, stay professional and insightful, and use plain \
numbered prose without markdown.";

/// Build the advisory prompt for one input snapshot.
///
/// # Examples
///
/// ```
/// use macroflow::advisory::build_prompt;
/// use macroflow::input::InputVector;
///
/// let prompt = build_prompt(&InputVector { interest_rate: 1.5, ..Default::default() });
/// assert!(prompt.contains("Policy rate change: +1.5%p"));
/// ```
#[must_use]
pub fn build_prompt(snapshot: &InputVector) -> String {
    format!(
        "The economic simulator is currently set to:\n\
         \n\
         1. Policy rate change: {}%p\n\
         2. Inflation rate change: {}%\n\
         3. Exchange rate change: {}%\n\
         4. Crude oil price change: {}%\n\
         5. Export volume change: {}%\n\
         6. Consumption sentiment change: {}%\n\
         7. Unemployment rate change: {}%p\n\
         8. Employment index change: {}\n\
         \n\
         Based on these settings, please cover two sections:\n\
         \n\
         1. [Scenario diagnosis]: Diagnose the resulting economic situation (boom, \
         downturn, stagflation, and so on) and walk through the chain reactions \
         between the variables.\n\
         2. [Allocation advice]: Recommend the three most promising asset classes \
         (for example bonds, growth or value or dividend equities, gold, dollars, \
         real estate, deposits) and name the assets to underweight, explaining the \
         reasoning for each.",
        signed(snapshot.interest_rate),
        signed(snapshot.inflation),
        signed(snapshot.exchange_rate),
        signed(snapshot.oil_price),
        signed(snapshot.export_change),
        signed(snapshot.consumption_change),
        signed(snapshot.unemployment_rate),
        signed(snapshot.employment_index),
    )
}

/// Render a delta with an explicit leading sign for positive values.
fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_carry_explicit_sign() {
        assert_eq!(signed(1.5), "+1.5");
        assert_eq!(signed(-0.5), "-0.5");
        assert_eq!(signed(0.0), "0");
    }

    #[test]
    fn prompt_lists_all_eight_fields() {
        let prompt = build_prompt(&InputVector {
            interest_rate: 1.0,
            inflation: -0.5,
            exchange_rate: 5.0,
            oil_price: 15.0,
            export_change: -3.0,
            consumption_change: 2.0,
            unemployment_rate: 0.3,
            employment_index: -4.0,
        });
        assert!(prompt.contains("1. Policy rate change: +1%p"));
        assert!(prompt.contains("2. Inflation rate change: -0.5%"));
        assert!(prompt.contains("8. Employment index change: -4"));
        assert!(prompt.contains("[Scenario diagnosis]"));
        assert!(prompt.contains("[Allocation advice]"));
    }
}
