/// Implements `Display`, `FromStr`, `Serialize` and `Deserialize` for an
/// algorithm enum using its registered names.
///
/// Legacy names are accepted when parsing but never produced.
macro_rules! impl_serde_jwa {
    ($T:ty, [
        $($name:literal => $val:expr; $valp:pat,)*
    ],
    legacy: [$($legacy:literal => $lval:expr,)*],
    expected: $expected:literal $(,)?
    ) => {
        impl $T {
            /// The name of this algorithm as registered in the
            /// [IANA `JSON Web Signature and Encryption Algorithms` registry][1].
            ///
            /// [1]: <https://www.iana.org/assignments/jose/jose.xhtml#web-signature-encryption-algorithms>
            pub const fn name(&self) -> &'static str {
                match self {
                    $($valp => $name,)*
                }
            }

            /// Tries to parse the given registered name into a variant, and
            /// returns `None` if no variant matched.
            pub(crate) fn from_registered_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some($val),)*
                    _ => None,
                }
            }

            #[allow(clippy::match_single_binding)]
            fn from_legacy_name(name: &str) -> Option<Self> {
                match name {
                    $($legacy => Some($lval),)*
                    _ => None,
                }
            }
        }

        impl core::fmt::Display for $T {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl core::str::FromStr for $T {
            type Err = crate::jwa::UnsupportedAlgorithm;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_registered_name(s)
                    .or_else(|| Self::from_legacy_name(s))
                    .ok_or_else(|| crate::jwa::UnsupportedAlgorithm {
                        name: s.to_owned(),
                        expected: $expected,
                    })
            }
        }

        #[allow(unused_qualifications)]
        impl<'de> serde::Deserialize<'de> for $T {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let name = <std::borrow::Cow<'_, str> as serde::Deserialize>::deserialize(deserializer)?;

                name.parse().map_err(|_| {
                    <D::Error as serde::de::Error>::invalid_value(
                        serde::de::Unexpected::Str(&name),
                        &$expected,
                    )
                })
            }
        }

        #[allow(unused_qualifications)]
        impl serde::Serialize for $T {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.name())
            }
        }
    };
}
