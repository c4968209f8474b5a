//! Enumerazioni - Tipi enumerati utilizzati nelle entità

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ********************* ENUMERAZIONI UTILI **********************//

/// Quality grade of a woodpellet batch.
///
/// The integer codes follow declaration order, `Undefined = 0` up to
/// `BasicallyNapalm = 5`; clients may send either the name or the code.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum Quality {
    #[default]
    Undefined = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    Premium = 4,
    BasicallyNapalm = 5,
}

impl Quality {
    pub const ALL: [Quality; 6] = [
        Quality::Undefined,
        Quality::Low,
        Quality::Medium,
        Quality::High,
        Quality::Premium,
        Quality::BasicallyNapalm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Quality::Undefined => "Undefined",
            Quality::Low => "Low",
            Quality::Medium => "Medium",
            Quality::High => "High",
            Quality::Premium => "Premium",
            Quality::BasicallyNapalm => "BasicallyNapalm",
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Returns the grade with the given integer code, if it is a member.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|q| i64::from(q.code()) == code)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error per nomi di qualità sconosciuti
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownQuality(pub String);

impl FromStr for Quality {
    type Err = UnknownQuality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|q| q.name() == s)
            .ok_or_else(|| UnknownQuality(s.to_string()))
    }
}
