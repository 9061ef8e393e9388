//! Client (customer) models.
//!
//! Clients are owned by the CRUD subsystem; the orchestration core only
//! reads them to compose prompts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Unique identifier for a client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub String);

impl ClientId {
    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ClientId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ClientId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Kind of client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientType {
    /// A company or brand account
    Brand,
    /// An individual creator
    Individual,
}

impl ClientType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientType::Brand => "brand",
            ClientType::Individual => "individual",
        }
    }
}

/// Client account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    #[default]
    Active,
    Paused,
}

/// Service package tier. Determines which communication channels a client
/// is expected to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageId {
    A,
    B,
    C,
}

impl PackageId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageId::A => "A",
            PackageId::B => "B",
            PackageId::C => "C",
        }
    }

    /// Channel keys a client on this package may report.
    pub fn allowed_channels(&self) -> &'static [&'static str] {
        match self {
            PackageId::A => &["youtube", "instagram", "tiktok", "blog", "homepage"],
            PackageId::B => &["youtube", "instagram", "tiktok"],
            PackageId::C => &["instagram", "tiktok"],
        }
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Brand profile used for prompt composition.
///
/// All fields are optional in practice; missing values render as empty
/// segments in the composed prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandInfo {
    /// Industry or business domain (e.g. "cafe")
    #[serde(default)]
    pub industry: String,

    /// Target audience description (e.g. "20s")
    #[serde(default)]
    pub target_audience: String,

    /// Ordered style tags (insertion order is preserved when joined)
    #[serde(default)]
    pub style: Vec<String>,

    /// Tone of voice (e.g. "friendly")
    #[serde(default)]
    pub tone: String,
}

/// A client record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Unique client ID
    pub id: ClientId,

    /// Display name
    pub name: String,

    /// Brand or individual
    #[serde(rename = "type")]
    pub client_type: ClientType,

    /// Business category (free text)
    #[serde(default)]
    pub category: String,

    /// Service package tier
    pub package_id: PackageId,

    /// Account status
    #[serde(default)]
    pub status: ClientStatus,

    /// Channel name -> handle/URL. Keys come from the package allow-list.
    #[serde(default)]
    pub channels: HashMap<String, String>,

    /// Brand profile for prompt composition
    #[serde(default)]
    pub brand_info: BrandInfo,
}
