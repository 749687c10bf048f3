//! Credential records and the marketplace table

use serde::{Deserialize, Serialize};

use super::CredentialError;

/// An Amazon marketplace a seller account can be registered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marketplace {
    pub id: &'static str,
    pub name: &'static str,
    pub code: &'static str,
}

/// Marketplaces offered by the settings form; the first is the default
pub const MARKETPLACES: [Marketplace; 11] = [
    Marketplace { id: "ATVPDKIKX0DER", name: "United States", code: "US" },
    Marketplace { id: "A2EUQ1WTGCTBG2", name: "Canada", code: "CA" },
    Marketplace { id: "A1AM78C64UM0Y8", name: "Mexico", code: "MX" },
    Marketplace { id: "A1F83G8C2ARO7P", name: "United Kingdom", code: "UK" },
    Marketplace { id: "A1PA6795UKMFR9", name: "Germany", code: "DE" },
    Marketplace { id: "A13V1IB3VIYZZH", name: "France", code: "FR" },
    Marketplace { id: "APJ6JRA9NG5A4", name: "Italy", code: "IT" },
    Marketplace { id: "A1RKKUPIHCS9HS", name: "Spain", code: "ES" },
    Marketplace { id: "A1VC38T7YXB5NI", name: "Japan", code: "JP" },
    Marketplace { id: "A39IBJ37TRQ1SH", name: "Australia", code: "AU" },
    Marketplace { id: "A21TJRUUN4KFC", name: "India", code: "IN" },
];

impl Marketplace {
    pub fn default_id() -> &'static str {
        MARKETPLACES[0].id
    }

    /// Exact id match
    pub fn find(id: &str) -> Option<&'static Marketplace> {
        MARKETPLACES.iter().find(|m| m.id == id)
    }

    /// Match by id or by country code (case-insensitive)
    pub fn resolve(id_or_code: &str) -> Option<&'static Marketplace> {
        Self::find(id_or_code).or_else(|| {
            MARKETPLACES
                .iter()
                .find(|m| m.code.eq_ignore_ascii_case(id_or_code))
        })
    }

    /// Marketplace for display; unknown ids fall back to the default
    pub fn for_display(id: &str) -> &'static Marketplace {
        Self::find(id).unwrap_or(&MARKETPLACES[0])
    }
}

/// A stored set of marketplace API credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub id: String,
    pub user_id: String,
    pub seller_id: String,
    pub marketplace_id: String,
    pub aws_access_key_id: String,
    pub aws_secret_key: String,
    pub role_arn: Option<String>,
    pub is_active: bool,
    /// Milliseconds since epoch
    pub created_at: i64,
}

impl Credential {
    /// Secret key with everything but the last four characters hidden
    pub fn masked_secret(&self) -> String {
        mask(&self.aws_secret_key)
    }

    pub fn marketplace(&self) -> &'static Marketplace {
        Marketplace::for_display(&self.marketplace_id)
    }
}

/// Form input for a new credential
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCredential {
    pub seller_id: String,
    pub marketplace_id: String,
    pub aws_access_key_id: String,
    pub aws_secret_key: String,
    #[serde(default)]
    pub role_arn: Option<String>,
}

impl NewCredential {
    /// Trim whitespace, drop an empty role ARN and check required fields
    pub fn normalized(self) -> Result<Self, CredentialError> {
        let seller_id = required("seller_id", self.seller_id)?;
        let aws_access_key_id = required("aws_access_key_id", self.aws_access_key_id)?;
        let aws_secret_key = required("aws_secret_key", self.aws_secret_key)?;
        let marketplace_id = self.marketplace_id.trim().to_string();
        if Marketplace::find(&marketplace_id).is_none() {
            return Err(CredentialError::UnknownMarketplace(marketplace_id));
        }
        let role_arn = self
            .role_arn
            .map(|arn| arn.trim().to_string())
            .filter(|arn| !arn.is_empty());

        Ok(Self {
            seller_id,
            marketplace_id,
            aws_access_key_id,
            aws_secret_key,
            role_arn,
        })
    }
}

fn required(field: &'static str, value: String) -> Result<String, CredentialError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CredentialError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "•".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "•".repeat(chars.len() - 4), visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NewCredential {
        NewCredential {
            seller_id: " A1B2C3D4E5F6G7 ".into(),
            marketplace_id: "A1PA6795UKMFR9".into(),
            aws_access_key_id: "AKIAEXAMPLE".into(),
            aws_secret_key: "secretvalue1234".into(),
            role_arn: Some("  ".into()),
        }
    }

    #[test]
    fn test_normalized_trims_and_drops_empty_arn() {
        let normalized = input().normalized().unwrap();
        assert_eq!(normalized.seller_id, "A1B2C3D4E5F6G7");
        assert_eq!(normalized.role_arn, None);
    }

    #[test]
    fn test_missing_field() {
        let mut bad = input();
        bad.aws_secret_key = "   ".into();
        assert!(matches!(
            bad.normalized(),
            Err(CredentialError::MissingField("aws_secret_key"))
        ));
    }

    #[test]
    fn test_unknown_marketplace() {
        let mut bad = input();
        bad.marketplace_id = "NOPE".into();
        assert!(matches!(
            bad.normalized(),
            Err(CredentialError::UnknownMarketplace(_))
        ));
    }

    #[test]
    fn test_marketplace_lookup() {
        assert_eq!(Marketplace::resolve("de").unwrap().name, "Germany");
        assert_eq!(Marketplace::resolve("ATVPDKIKX0DER").unwrap().code, "US");
        assert_eq!(Marketplace::for_display("???").code, "US");
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("abcdefgh"), "••••efgh");
        assert_eq!(mask("abc"), "•••");
    }
}
