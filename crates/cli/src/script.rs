//! Wishlist replay scripts.
//!
//! A script is a YAML document listing wishlist operations in order:
//!
//! ```yaml
//! steps:
//!   - op: add
//!     product_id: p-chiron
//!     name: Chiron
//!     price: "5500000"
//!     image: chiron.png
//!   - op: move_to_cart
//!     name: Chiron
//!   - op: remove
//!     name: Chiron
//! ```

use std::path::Path;

use hypercars_core::{CurrencyCode, Price, WishlistEntry};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid script: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// One wishlist operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Add {
        #[serde(default)]
        product_id: String,
        name: String,
        price: Decimal,
        #[serde(default)]
        currency: Option<CurrencyCode>,
        #[serde(default)]
        image: String,
    },
    Remove {
        name: String,
    },
    MoveToCart {
        name: String,
    },
}

impl Step {
    /// Build the wishlist entry for an `add` step, pricing it in `currency`
    /// unless the step names its own.
    #[must_use]
    pub fn to_entry(&self, currency: CurrencyCode) -> Option<WishlistEntry> {
        match self {
            Self::Add {
                product_id,
                name,
                price,
                currency: own,
                image,
            } => Some(WishlistEntry::new(
                product_id.as_str(),
                name.as_str(),
                Price::new(*price, own.unwrap_or(currency)),
                image.as_str(),
            )),
            Self::Remove { .. } | Self::MoveToCart { .. } => None,
        }
    }

    /// The product name the step targets.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Add { name, .. } | Self::Remove { name } | Self::MoveToCart { name } => name,
        }
    }
}

/// A parsed replay script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    /// Parse a script from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `ScriptError::Parse` on malformed YAML or unknown operations.
    pub fn parse(yaml: &str) -> Result<Self, ScriptError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a script file.
    ///
    /// # Errors
    ///
    /// Returns `ScriptError` if the file cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ScriptError::Io {
                path: path.display().to_string(),
                source,
            })?;
        Self::parse(&content)
    }

    /// Check the script for steps that are accepted but almost certainly
    /// mistakes. Returns one message per problem, prefixed with the step
    /// number (1-based).
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        for (i, step) in self.steps.iter().enumerate() {
            let n = i + 1;
            if step.name().trim().is_empty() {
                problems.push(format!("step {n}: empty product name"));
            }
            if let Step::Add { price, .. } = step {
                if *price < Decimal::ZERO {
                    problems.push(format!("step {n}: negative price {price}"));
                }
            }
        }

        problems
    }
}
