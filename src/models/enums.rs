use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + keyword lookup.
/// Lookup of an unknown keyword yields None — field extraction is
/// tolerant and never fails.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            pub fn from_keyword(s: &str) -> Option<Self> {
                match s {
                    $($s => Some(Self::$variant)),+,
                    _ => None,
                }
            }
        }
    };
}

str_enum!(OpkResult {
    Positive => "positive",
    Negative => "negative",
});

str_enum!(CervicalMucus {
    Dry => "dry",
    Sticky => "sticky",
    Creamy => "creamy",
    Watery => "watery",
    Slippery => "slippery",
    Eggwhite => "eggwhite",
});

impl CervicalMucus {
    /// Fertile-type descriptors signal an approaching fertile window.
    pub fn is_fertile(&self) -> bool {
        matches!(self, Self::Eggwhite | Self::Slippery | Self::Watery)
    }
}
