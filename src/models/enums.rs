use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Severity {
    Mild => "Mild",
    Moderate => "Moderate",
    Severe => "Severe",
});

str_enum!(Priority {
    Low => "Low",
    Medium => "Medium",
    High => "High",
});

str_enum!(ChatRole {
    User => "user",
    Assistant => "assistant",
});

impl Severity {
    /// Score multiplier applied to the summed symptom weights.
    pub fn multiplier(&self) -> f64 {
        match self {
            Severity::Mild => 1.0,
            Severity::Moderate => 1.5,
            Severity::Severe => 2.0,
        }
    }
}
