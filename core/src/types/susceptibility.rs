use std::fmt;

/// Antibiogram susceptibility code
///
/// Reported in culture results as a single isolated letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub enum Susceptibility {
    #[cfg_attr(feature = "json", serde(rename = "R"))]
    Resistant,
    #[cfg_attr(feature = "json", serde(rename = "S"))]
    Susceptible,
    #[cfg_attr(feature = "json", serde(rename = "I"))]
    Intermediate,
}

impl Susceptibility {
    /// Returns the report letter
    pub fn code(&self) -> char {
        match self {
            Susceptibility::Resistant => 'R',
            Susceptibility::Susceptible => 'S',
            Susceptibility::Intermediate => 'I',
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            Susceptibility::Resistant => "resistant",
            Susceptibility::Susceptible => "susceptible",
            Susceptibility::Intermediate => "intermediate",
        }
    }

    /// Parses an exact, upper-case report letter
    ///
    /// Lower-case letters are not codes: "s" in a report line is a word
    /// fragment, not a result.
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "R" => Some(Susceptibility::Resistant),
            "S" => Some(Susceptibility::Susceptible),
            "I" => Some(Susceptibility::Intermediate),
            _ => None,
        }
    }
}

impl fmt::Display for Susceptibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("R", Some(Susceptibility::Resistant))]
    #[case("S", Some(Susceptibility::Susceptible))]
    #[case("I", Some(Susceptibility::Intermediate))]
    #[case("r", None)]
    #[case("SR", None)]
    #[case("", None)]
    fn test_from_code(#[case] input: &str, #[case] expected: Option<Susceptibility>) {
        assert_eq!(Susceptibility::from_code(input), expected);
    }

    #[test]
    fn test_display_is_code_letter() {
        assert_eq!(Susceptibility::Resistant.to_string(), "R");
        assert_eq!(Susceptibility::Susceptible.to_string(), "S");
        assert_eq!(Susceptibility::Intermediate.to_string(), "I");
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(Susceptibility::Intermediate.simple_name(), "intermediate");
    }
}
