//! Classification Module - sign and decimal magnitude of an integer.
//!
//! Every integer classifies successfully; values outside the unit to
//! thousand bands are reported as [`Magnitude::Unclassified`].

use serde::Serialize;

/// Sign of an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Neutral,
    Positive,
    Negative,
}

impl Sign {
    pub fn label(&self) -> &'static str {
        match self {
            Sign::Neutral => "Es Neutro",
            Sign::Positive => "Es Positivo",
            Sign::Negative => "Es Negativo",
        }
    }
}

/// Decimal magnitude band of a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Magnitude {
    Unit,
    Ten,
    Hundred,
    Thousand,
    Unclassified,
}

impl Magnitude {
    pub fn label(&self) -> &'static str {
        match self {
            Magnitude::Unit => "Es Unidad",
            Magnitude::Ten => "Es Decena",
            Magnitude::Hundred => "Es Centena",
            Magnitude::Thousand => "Es Millar",
            Magnitude::Unclassified => "No se que es",
        }
    }
}

/// Sign and magnitude of one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberClassification {
    pub value: i64,
    pub sign: Sign,
    pub magnitude: Magnitude,
}

pub struct NumberClassifier;

impl NumberClassifier {
    pub fn classify(value: i64) -> NumberClassification {
        NumberClassification {
            value,
            sign: Self::sign(value),
            magnitude: Self::magnitude(value),
        }
    }

    pub fn sign(value: i64) -> Sign {
        match value {
            0 => Sign::Neutral,
            v if v > 0 => Sign::Positive,
            _ => Sign::Negative,
        }
    }

    pub fn magnitude(value: i64) -> Magnitude {
        match value {
            1..=9 => Magnitude::Unit,
            10..=99 => Magnitude::Ten,
            100..=999 => Magnitude::Hundred,
            1000..=9999 => Magnitude::Thousand,
            _ => Magnitude::Unclassified,
        }
    }
}
