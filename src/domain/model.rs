use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The single payload behind the page: three ordered record sequences.
///
/// The sequences themselves are required; a document without one of them
/// fails to parse. Fields inside individual records are not validated and
/// default to empty values when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
}

impl PortfolioDocument {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn record_count(&self) -> usize {
        self.skills.len() + self.projects.len() + self.certificates.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub level: String,
    #[serde(deserialize_with = "text")]
    pub icon: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    #[serde(deserialize_with = "text_list")]
    pub tags: Vec<String>,
}

impl Skill {
    pub fn level(&self) -> SkillLevel {
        SkillLevel::classify(&self.level)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    #[serde(deserialize_with = "text")]
    pub icon: String,
    #[serde(deserialize_with = "text_list")]
    pub technologies: Vec<String>,
    #[serde(
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub github: Option<String>,
    #[serde(
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub live: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certificate {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub issuer: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    #[serde(deserialize_with = "text")]
    pub icon: String,
    #[serde(deserialize_with = "text")]
    pub date: String,
    #[serde(
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub credential_id: Option<String>,
}

/// Proficiency bucket derived from the free-form `level` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Advanced,
    Intermediate,
    Beginner,
    Other,
}

impl SkillLevel {
    pub fn classify(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "advanced" => SkillLevel::Advanced,
            "intermediate" => SkillLevel::Intermediate,
            "beginner" => SkillLevel::Beginner,
            _ => SkillLevel::Other,
        }
    }

    pub fn color(&self) -> LevelColor {
        match self {
            SkillLevel::Advanced => LevelColor::Teal,
            SkillLevel::Intermediate => LevelColor::BlueViolet,
            SkillLevel::Beginner => LevelColor::Pink,
            SkillLevel::Other => LevelColor::NeutralGrey,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelColor {
    Teal,
    BlueViolet,
    Pink,
    NeutralGrey,
}

impl LevelColor {
    pub fn hex(&self) -> &'static str {
        match self {
            LevelColor::Teal => "#00d4aa",
            LevelColor::BlueViolet => "#5a67ff",
            LevelColor::Pink => "#ff6b9d",
            LevelColor::NeutralGrey => "#b0b0c0",
        }
    }
}

/// Record fields are display text. Numbers and booleans are shown as written
/// instead of failing the whole document; `null` reads as empty.
fn display_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(display_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(display_text(Value::deserialize(deserializer)?))
}

fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items
        .into_iter()
        .map(|item| display_text(item).unwrap_or_default())
        .collect())
}

/// Optional links count as absent when empty, matching how the page treats
/// falsy values.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
