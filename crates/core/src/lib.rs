#![forbid(unsafe_code)]

pub mod ids {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FranchiseId(i64);

    impl FranchiseId {
        pub fn new(value: i64) -> Self {
            Self(value)
        }

        pub fn get(self) -> i64 {
            self.0
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct BranchId(i64);

    impl BranchId {
        pub fn new(value: i64) -> Self {
            Self(value)
        }

        pub fn get(self) -> i64 {
            self.0
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ProductId(i64);

    impl ProductId {
        pub fn new(value: i64) -> Self {
            Self(value)
        }

        pub fn get(self) -> i64 {
            self.0
        }
    }

    impl From<FranchiseId> for i64 {
        fn from(value: FranchiseId) -> Self {
            value.0
        }
    }

    impl From<BranchId> for i64 {
        fn from(value: BranchId) -> Self {
            value.0
        }
    }

    impl From<ProductId> for i64 {
        fn from(value: ProductId) -> Self {
            value.0
        }
    }

    impl std::fmt::Display for FranchiseId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl std::fmt::Display for BranchId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl std::fmt::Display for ProductId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }
}

pub mod model {
    use serde::Serialize;

    pub const MAX_NAME_CHARS: usize = 200;

    /// Which level of the hierarchy a row belongs to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Entity {
        Franchise,
        Branch,
        Product,
    }

    impl Entity {
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Franchise => "franchise",
                Self::Branch => "branch",
                Self::Product => "product",
            }
        }
    }

    impl std::fmt::Display for Entity {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.as_str())
        }
    }

    /// Display name shared by franchises, branches and products.
    ///
    /// Stored verbatim; only blank-ness is judged on the trimmed value.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct EntityName(String);

    impl EntityName {
        pub fn try_new(value: impl Into<String>) -> Result<Self, NameError> {
            let value = value.into();
            validate_name(&value)?;
            Ok(Self(value))
        }

        pub fn as_str(&self) -> &str {
            &self.0
        }

        pub fn into_string(self) -> String {
            self.0
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
    pub enum NameError {
        #[error("must not be blank")]
        Blank,
        #[error("must be at most {max} characters (got {len})")]
        TooLong { len: usize, max: usize },
    }

    fn validate_name(value: &str) -> Result<(), NameError> {
        if value.trim().is_empty() {
            return Err(NameError::Blank);
        }
        let len = value.chars().count();
        if len > MAX_NAME_CHARS {
            return Err(NameError::TooLong {
                len,
                max: MAX_NAME_CHARS,
            });
        }
        Ok(())
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Stock(i64);

    impl Stock {
        pub fn try_new(value: i64) -> Result<Self, StockError> {
            if value < 0 {
                return Err(StockError::Negative(value));
            }
            Ok(Self(value))
        }

        pub fn get(self) -> i64 {
            self.0
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
    pub enum StockError {
        #[error("must be greater than or equal to 0 (got {0})")]
        Negative(i64),
    }
}

#[cfg(test)]
mod tests;
