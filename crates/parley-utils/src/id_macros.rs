// parley/parley-utils
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

#[macro_export]
macro_rules! id_string {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Clone, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            #[allow(dead_code)]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl<T> From<T> for $t
        where
            T: Into<String>,
        {
            fn from(s: T) -> $t {
                $t(s.into())
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $t {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($t(s.to_string()))
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Declares a numeric identifier as assigned by the server. Serializes as a plain JSON number.
#[macro_export]
macro_rules! id_number {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $t(i64);

        impl $t {
            #[allow(dead_code)]
            pub fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> $t {
                $t(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> i64 {
                value.0
            }
        }

        impl std::str::FromStr for $t {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map($t)
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    id_number!(SampleId);
    id_string!(SampleName);

    #[test]
    fn test_id_number_serializes_as_plain_number() {
        let id = SampleId::from(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        assert_eq!(serde_json::from_str::<SampleId>("7").unwrap(), SampleId::from(7));
        assert_eq!(" 12 ".parse::<SampleId>().unwrap(), SampleId::from(12));
    }

    #[test]
    fn test_id_string_is_transparent() {
        let name = SampleName::from("👍");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"👍\"");
        assert_eq!(name.to_string(), "👍");
    }
}
