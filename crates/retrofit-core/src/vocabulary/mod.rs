//! # Closed Vocabularies
//!
//! Every enumerated survey value in the engine is declared with
//! [`labelled_enum!`](crate::labelled_enum), which generates the enum plus:
//!
//! - `ALL` and `as_str()` (the wire label),
//! - a [`Labelled`] implementation exposing the symbolic name,
//! - `Display`, `FromStr`, and string-based serde impls.
//!
//! The wire label is what JSON records carry (`"mains gas"`). The symbolic
//! name is the SCREAMING_SNAKE identifier (`MAINS_GAS`) that legacy code
//! tables use to refer to a value.

pub mod energy;
pub mod epc;
pub mod fabric;

/// A closed vocabulary whose values carry a wire label and a symbolic name.
pub trait Labelled: Copy + Eq + std::fmt::Debug + 'static {
    /// Vocabulary name used in diagnostics.
    const KIND: &'static str;

    /// Every value, in declaration order.
    fn all() -> &'static [Self];

    /// Wire label (serde representation).
    fn label(&self) -> &'static str;

    /// SCREAMING_SNAKE symbolic name.
    fn symbol(&self) -> &'static str;

    /// Exact lookup by symbolic name.
    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.symbol() == symbol)
    }

    /// Exact lookup by wire label.
    fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.label() == label)
    }
}

/// Declare a closed vocabulary.
///
/// ```
/// retrofit_core::labelled_enum! {
///     /// Example vocabulary.
///     pub enum Tariff: "tariff" {
///         /// Single rate.
///         Standard => ("STANDARD", "standard"),
///         /// Time-of-use.
///         OffPeak => ("OFF_PEAK", "off-peak"),
///     }
/// }
///
/// use retrofit_core::Labelled;
/// assert_eq!(Tariff::OffPeak.as_str(), "off-peak");
/// assert_eq!(Tariff::from_symbol("STANDARD"), Some(Tariff::Standard));
/// ```
#[macro_export]
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($symbol:literal, $label:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire label of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl $crate::vocabulary::Labelled for $name {
            const KIND: &'static str = $kind;

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn label(&self) -> &'static str {
                self.as_str()
            }

            fn symbol(&self) -> &'static str {
                match self {
                    $($name::$variant => $symbol,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::RetrofitError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err($crate::error::RetrofitError::UnknownValue {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::__serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                raw.parse()
                    .map_err(<D::Error as $crate::__serde::de::Error>::custom)
            }
        }
    };
}
