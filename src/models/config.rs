use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::UserInfo;

/// General feature switches
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    pub share_password_sms_enabled: bool,
    pub crypto_enabled: bool,
    pub email_notification_button_enabled: bool,
    pub eula_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weak_password_enabled: Option<bool>,
}

/// Read-only infrastructure properties
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureProperties {
    pub sms_config_enabled: bool,
    pub media_server_config_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_default_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_enforce_direct_upload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_uuid: Option<String>,
}

/// Server-side defaults applied to new resources
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_default: Option<String>,
    /// Days until a new download share expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_share_default_expiration_period: Option<i64>,
    /// Days until a new upload share expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_share_default_expiration_period: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_default_expiration_period: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonmember_viewer_default: Option<bool>,
}

/// Character classes a password must draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterRule {
    Alpha,
    Uppercase,
    Lowercase,
    Numeric,
    Special,
    All,
    #[serde(other)]
    Unknown,
}

/// Character composition rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRules {
    pub must_contain_characters: Vec<CharacterRule>,
    pub number_of_characteristics_to_enforce: i32,
}

/// Password policy for one credential class
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPolicy {
    pub character_rules: CharacterRules,
    pub min_length: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_dictionary_words: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_user_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_keyboard_patterns: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_archived_passwords: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<UserInfo>,
}

/// Password policies per credential class
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPoliciesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_password_policies: Option<PasswordPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares_password_policies: Option<PasswordPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_password_policies: Option<PasswordPolicy>,
}

/// Classification-driven share constraints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareClassificationPolicies {
    /// Minimum classification id that forces a share password
    pub classification_requires_share_password: i32,
}

/// Classification policies
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationPoliciesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_classification_policies: Option<ShareClassificationPolicies>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_policies_parse_wire_fixture() {
        let json = r#"{
            "loginPasswordPolicies": {
                "characterRules": {
                    "mustContainCharacters": ["uppercase", "numeric", "emoji"],
                    "numberOfCharacteristicsToEnforce": 2
                },
                "minLength": 12,
                "rejectDictionaryWords": true
            }
        }"#;
        let config: PasswordPoliciesConfig = serde_json::from_str(json).unwrap();
        let login = config.login_password_policies.unwrap();
        assert_eq!(login.min_length, 12);
        assert_eq!(
            login.character_rules.must_contain_characters,
            vec![CharacterRule::Uppercase, CharacterRule::Numeric, CharacterRule::Unknown]
        );
        assert!(config.shares_password_policies.is_none());
    }
}
