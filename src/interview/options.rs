use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Lookup failure while resolving interview options
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unknown {table} key '{key}'")]
    UnknownKey { table: &'static str, key: String },
}

/// Title-case a snake_case key: `mid_level` -> `Mid Level`
fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

macro_rules! interview_option {
    (
        $(#[$meta:meta])*
        $name:ident, $table:literal, default = $default:ident {
            $($variant:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            /// Every option in form order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Table key, also used as the form value
            pub fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl FromStr for $name {
            type Err = TemplateError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    other => Err(TemplateError::UnknownKey {
                        table: $table,
                        key: other.to_string(),
                    }),
                }
            }
        }
    };
}

interview_option! {
    /// Job family the candidate interviews for
    Role, "role", default = SoftwareEngineer {
        SoftwareEngineer => "software_engineer",
        DataScientist => "data_scientist",
        ProductManager => "product_manager",
        Marketing => "marketing",
        Sales => "sales",
        CustomerService => "customer_service",
    }
}

interview_option! {
    /// Seniority of the position
    Level, "experience level", default = MidLevel {
        EntryLevel => "entry_level",
        MidLevel => "mid_level",
        SeniorLevel => "senior_level",
        Leadership => "leadership",
    }
}

interview_option! {
    /// Length bucket, which sets the pacing of the conversation
    InterviewDuration, "duration", default = ThirtyMinutes {
        FifteenMinutes => "15_minutes",
        ThirtyMinutes => "30_minutes",
        FortyFiveMinutes => "45_minutes",
        SixtyMinutes => "60_minutes",
    }
}

interview_option! {
    /// Kind of employer the interview simulates
    CompanyType, "company type", default = Enterprise {
        Startup => "startup",
        MidSize => "mid_size",
        Enterprise => "enterprise",
        Faang => "faang",
    }
}

impl Role {
    pub fn label(&self) -> String {
        title_case(self.key())
    }

    /// Role name as spoken in the opening message
    pub fn spoken_name(&self) -> String {
        self.key().replace('_', " ")
    }
}

impl Level {
    pub fn label(&self) -> String {
        title_case(self.key())
    }
}

impl InterviewDuration {
    pub fn label(&self) -> String {
        title_case(self.key())
    }
}

impl CompanyType {
    pub fn label(&self) -> String {
        match self {
            CompanyType::Faang => "FAANG".to_string(),
            other => title_case(other.key()),
        }
    }
}
