use std::path::PathBuf;

use color_eyre::{eyre::WrapErr, Result};
use serde::Deserialize;

use crate::models::Casino;

// ---------------------------------------------------------------------------
// CasinoSource trait (the quiz only needs a read of the casino list)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait CasinoSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> String;

    fn casinos(&self) -> impl std::future::Future<Output = Result<Vec<Casino>>> + Send;
}

// ---------------------------------------------------------------------------
// Content-export records
// ---------------------------------------------------------------------------

/// A file holds either the CMS envelope (`{"data": [...]}`) or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum CasinoDocument {
    Envelope { data: Vec<CasinoRecord> },
    Bare(Vec<CasinoRecord>),
}

#[derive(Deserialize)]
struct CasinoRecord {
    id: u32,
    attributes: CasinoAttributes,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CasinoAttributes {
    name: String,
    #[serde(default)]
    slug: String,
    #[serde(default)]
    short_description: String,
    rating: f64,
    #[serde(default)]
    bonus_amount: Option<String>,
    #[serde(default)]
    free_spins: Option<String>,
    #[serde(default)]
    no_deposit: bool,
    #[serde(default)]
    fast_payouts: bool,
    #[serde(default)]
    is_new: bool,
    #[serde(default)]
    website_url: String,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

impl From<CasinoRecord> for Casino {
    fn from(record: CasinoRecord) -> Self {
        let a = record.attributes;
        Casino {
            id: record.id,
            name: a.name,
            slug: a.slug,
            short_description: a.short_description,
            rating: a.rating,
            bonus_amount: a.bonus_amount.unwrap_or_default(),
            free_spins: a.free_spins.unwrap_or_default(),
            no_deposit: a.no_deposit,
            fast_payouts: a.fast_payouts,
            is_new: a.is_new,
            website_url: a.website_url,
            tags: a.tags,
        }
    }
}

pub fn parse_casinos(json: &str) -> Result<Vec<Casino>> {
    let records = match serde_json::from_str::<CasinoDocument>(json)? {
        CasinoDocument::Envelope { data } => data,
        CasinoDocument::Bare(records) => records,
    };
    Ok(records.into_iter().map(Casino::from).collect())
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Casinos exported from the content backend to a JSON file.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CasinoSource for JsonFileSource {
    fn name(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn casinos(&self) -> Result<Vec<Casino>> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .wrap_err_with(|| format!("could not read {}", self.path.display()))?;
        parse_casinos(&json).wrap_err_with(|| format!("invalid casino data in {}", self.path.display()))
    }
}

/// Hard-coded records used when the content backend is unavailable.
pub struct BuiltinCasinos {
    copies: u32,
}

impl BuiltinCasinos {
    pub const DEFAULT_COPIES: u32 = 4;

    pub fn new(copies: u32) -> Self {
        Self { copies }
    }

    pub fn records(&self) -> Vec<Casino> {
        let base = featured_casino();
        (1..=self.copies)
            .map(|n| Casino {
                id: n,
                name: format!("{} {n}", base.name),
                slug: format!("{}-{n}", base.slug),
                ..base.clone()
            })
            .collect()
    }
}

impl Default for BuiltinCasinos {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COPIES)
    }
}

impl CasinoSource for BuiltinCasinos {
    fn name(&self) -> String {
        "built-in records".to_string()
    }

    async fn casinos(&self) -> Result<Vec<Casino>> {
        Ok(self.records())
    }
}

fn featured_casino() -> Casino {
    Casino {
        id: 1,
        name: "Gamdom Casino".to_string(),
        slug: "gamdom-casino".to_string(),
        short_description:
            "Fast payouts, 2000+ games, and exclusive C$1000 bonus for Canadian players."
                .to_string(),
        rating: 4.5,
        bonus_amount: "Exclusive C$1000 bonus".to_string(),
        free_spins: "100 Free Spins".to_string(),
        no_deposit: true,
        fast_payouts: true,
        is_new: true,
        website_url: "https://gamdom.com".to_string(),
        tags: Some(vec![
            "slots".to_string(),
            "cad".to_string(),
            "welcome_bonus".to_string(),
        ]),
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Reads `primary`, falling back to `fallback` when it fails, and prepares the
/// records for the quiz by deriving tags where none were authored.
pub async fn load_casinos<P, F>(primary: &P, fallback: &F) -> Result<Vec<Casino>>
where
    P: CasinoSource,
    F: CasinoSource,
{
    let casinos = match primary.casinos().await {
        Ok(casinos) => {
            tracing::info!("loaded {} casinos from {}", casinos.len(), primary.name());
            casinos
        }
        Err(e) => {
            tracing::warn!(
                "could not load casinos from {}, using {}: {e:#}",
                primary.name(),
                fallback.name()
            );
            fallback.casinos().await?
        }
    };

    Ok(casinos.into_iter().map(Casino::with_derived_tags).collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
