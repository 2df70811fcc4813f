//! Closed-set categorical encodings.

use std::str::FromStr;

use itertools::Itertools;

use crate::inference::error::{Field, InferenceError};

/// Brand codes as the scaler and the model were fit with.
static BRAND_CODES: phf::Map<&'static str, u8> = phf::phf_map! {
    "Ambassador" => 20,
    "Ashok" => 27,
    "Audi" => 10,
    "BMW" => 11,
    "Chevrolet" => 29,
    "Daewoo" => 9,
    "Datsun" => 26,
    "Fiat" => 19,
    "Force" => 28,
    "Ford" => 4,
    "Honda" => 7,
    "Hyundai" => 6,
    "Isuzu" => 14,
    "Jaguar" => 21,
    "Jeep" => 22,
    "Kia" => 2,
    "Land" => 30,
    "Lexus" => 8,
    "MG" => 0,
    "Mahindra" => 1,
    "Maruti" => 12,
    "Mercedes-Benz" => 24,
    "Mitsubishi" => 15,
    "Nissan" => 5,
    "Opel" => 16,
    "Peugot" => 3,
    "Renault" => 13,
    "Skoda" => 18,
    "Tata" => 23,
    "Toyota" => 17,
    "Volkswagen" => 25,
    "Volvo" => 31,
};

/// Looks up the brand code. The name must already be trimmed, matching is case-sensitive.
pub fn encode_brand(name: &str) -> Result<u8, InferenceError> {
    BRAND_CODES
        .get(name)
        .copied()
        .ok_or_else(|| InferenceError::UnknownCategory {
            field: Field::Brand,
            value: name.to_string(),
        })
}

pub fn encode_transmission(name: &str) -> Result<u8, InferenceError> {
    Transmission::from_str(name).map(Transmission::code)
}

/// Known brand names in alphabetical order.
pub fn brands() -> Vec<&'static str> {
    BRAND_CODES.keys().copied().sorted().collect()
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transmission {
    Automatic,
    Manual,
}

impl Transmission {
    pub const ALL: [Self; 2] = [Self::Automatic, Self::Manual];

    pub const fn code(self) -> u8 {
        match self {
            Self::Automatic => 0,
            Self::Manual => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Automatic => "Automatic",
            Self::Manual => "Manual",
        }
    }
}

impl FromStr for Transmission {
    type Err = InferenceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Automatic" => Ok(Self::Automatic),
            "Manual" => Ok(Self::Manual),
            _ => Err(InferenceError::UnknownCategory {
                field: Field::Transmission,
                value: value.to_string(),
            }),
        }
    }
}
