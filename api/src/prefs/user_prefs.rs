use serde::Deserialize;
use serde::Serialize;

/// Mint used when `CASHU_POCKET_MINT_URL` is not set.
const DEFAULT_MINT_URL: &str = "https://testnut.cashu.space";

/// Represents all user prefs. Intended for saving to a file, editing in a
/// settings dialog, etc.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    mint_url: String,
}

impl Default for UserPrefs {
    fn default() -> Self {
        let mint_url = std::env::var("CASHU_POCKET_MINT_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_MINT_URL.to_string());

        Self { mint_url }
    }
}

impl UserPrefs {
    pub fn mint_url(&self) -> &str {
        &self.mint_url
    }
}
