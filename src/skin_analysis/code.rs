//! Four letter skin type codes

use std::fmt;

use serde::{Serialize, Serializer};

/// Oily score strictly above this is oily.
pub const OILY_THRESHOLD: f32 = 0.3;
/// Pigmentation score strictly above this is pigmented.
pub const PIGMENTATION_THRESHOLD: f32 = 0.2;

/// Fourth letter, always emitted as tight.
pub const FIXED_SUFFIX: char = 'T';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Oiliness {
    Oily,
    Dry,
}

impl Oiliness {
    pub fn from_score(score: f32) -> Self {
        if score > OILY_THRESHOLD {
            Oiliness::Oily
        } else {
            Oiliness::Dry
        }
    }

    pub fn letter(self) -> char {
        match self {
            Oiliness::Oily => 'O',
            Oiliness::Dry => 'D',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sensitivity {
    Sensitive,
    Resistant,
}

impl Sensitivity {
    pub fn from_flag(sensitive: bool) -> Self {
        if sensitive {
            Sensitivity::Sensitive
        } else {
            Sensitivity::Resistant
        }
    }

    pub fn letter(self) -> char {
        match self {
            Sensitivity::Sensitive => 'S',
            Sensitivity::Resistant => 'R',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pigmentation {
    Pigmented,
    NonPigmented,
}

impl Pigmentation {
    pub fn from_score(score: f32) -> Self {
        if score > PIGMENTATION_THRESHOLD {
            Pigmentation::Pigmented
        } else {
            Pigmentation::NonPigmented
        }
    }

    pub fn letter(self) -> char {
        match self {
            Pigmentation::Pigmented => 'P',
            Pigmentation::NonPigmented => 'N',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SkinTypeCode {
    pub oiliness: Oiliness,
    pub sensitivity: Sensitivity,
    pub pigmentation: Pigmentation,
}

impl SkinTypeCode {
    pub fn new(oiliness: Oiliness, sensitivity: Sensitivity, pigmentation: Pigmentation) -> Self {
        Self {
            oiliness,
            sensitivity,
            pigmentation,
        }
    }

    /// Builds the code from raw classifier scores and the sensitivity flag.
    pub fn from_signals(oily_score: f32, sensitive: bool, pigmentation_score: f32) -> Self {
        Self::new(
            Oiliness::from_score(oily_score),
            Sensitivity::from_flag(sensitive),
            Pigmentation::from_score(pigmentation_score),
        )
    }

    /// Every code in the taxonomy, including the wrinkled variants the
    /// assembler never produces.
    pub fn taxonomy() -> Vec<String> {
        let mut codes = Vec::with_capacity(16);
        for o in ['O', 'D'] {
            for s in ['S', 'R'] {
                for p in ['P', 'N'] {
                    for t in ['T', 'W'] {
                        codes.push([o, s, p, t].iter().collect());
                    }
                }
            }
        }
        codes
    }
}

impl fmt::Display for SkinTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.oiliness.letter(),
            self.sensitivity.letter(),
            self.pigmentation.letter(),
            FIXED_SUFFIX
        )
    }
}

impl Serialize for SkinTypeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
