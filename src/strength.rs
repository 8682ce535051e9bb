/// Coarse label for a strength score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> StrengthLabel {
        match score {
            0..=39 => StrengthLabel::Weak,
            40..=69 => StrengthLabel::Medium,
            _ => StrengthLabel::Strong,
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// A score together with its label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strength {
    pub score: u8,
    pub label: StrengthLabel,
}

/// Scores a password between 0 and 100.
///
/// | condition                                 | points |
/// |-------------------------------------------|--------|
/// | at least 12 characters                    | 25     |
/// | at least 16 characters                    | 25     |
/// | both lower and upper case ascii letters   | 20     |
/// | an ascii digit                            | 15     |
/// | anything outside of `[A-Za-z0-9]`         | 15     |
pub fn score(password: &str) -> u8 {
    let length = password.chars().count();
    let mut score: u8 = 0;

    if length >= 12 {
        score += 25;
    }
    if length >= 16 {
        score += 25;
    }
    if password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
    {
        score += 20;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 15;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 15;
    }

    score.min(100)
}

/// Scores and labels a password, an empty password isn't classified.
pub fn classify(password: &str) -> Option<Strength> {
    if password.is_empty() {
        return None;
    }
    let score = score(password);
    Some(Strength {
        score,
        label: StrengthLabel::from_score(score),
    })
}

#[cfg(test)]
#[path = "tests/strength.rs"]
mod strength_tests;
