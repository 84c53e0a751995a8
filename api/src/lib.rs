//! This crate contains all shared fullstack server functions.

pub mod prefs;
mod types;

use dioxus::prelude::*;
use prefs::user_prefs::UserPrefs;
pub use types::Bolt11InvoiceInfo;
pub use types::Nut18PaymentRequestInfo;

pub type ApiError = anyhow::Error;

/// Retrieves the user's preferences.
///
/// In the future this may read from a settings file.  For now it just
/// returns the default settings, which read from env vars.
#[post("/api/get_user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    Ok(UserPrefs::default())
}

#[post("/api/wallet_balance")]
pub async fn wallet_balance() -> Result<u64, ApiError> {
    let balance = cashu_wallet::balance().await?;
    dioxus_logger::tracing::info!("wallet balance: {} sats", balance);

    Ok(balance)
}

/// Builds a NUT-18 payment request for the configured mint.
///
/// Both the amount and the description are optional; an amount-less request
/// lets the payer choose how much to send.
#[post("/api/create_nut18_payment_request")]
pub async fn create_nut18_payment_request(
    amount: Option<u64>,
    description: Option<String>,
) -> Result<Nut18PaymentRequestInfo, ApiError> {
    let info = cashu_wallet::create_nut18_payment_request(amount, description)?;
    dioxus_logger::tracing::info!("created payment request: {}", info.request);

    Ok(info)
}

/// Requests a bolt11 mint quote from the configured mint.
///
/// The amount is required and must be a positive number of sats; the mint
/// rejects descriptions it does not support.
#[post("/api/create_bolt11_invoice")]
pub async fn create_bolt11_invoice(
    amount: u64,
    description: Option<String>,
) -> Result<Bolt11InvoiceInfo, ApiError> {
    let info = cashu_wallet::create_bolt11_invoice(amount, description).await?;
    dioxus_logger::tracing::info!("created bolt11 invoice expiring at {}", info.expiry);

    Ok(info)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
mod cashu_wallet {
    use std::path::Path;
    use std::path::PathBuf;
    use std::str::FromStr;
    use std::sync::Arc;

    use bip39::Mnemonic;
    use cdk::mint_url::MintUrl;
    use cdk::nuts::nut18::PaymentRequest;
    use cdk::nuts::CurrencyUnit;
    use cdk::wallet::Wallet;
    use cdk::Amount;
    use cdk_sqlite::wallet::WalletSqliteDatabase;
    use rand::Rng;

    use super::prefs::user_prefs::UserPrefs;
    use super::ApiError;
    use super::Bolt11InvoiceInfo;
    use super::Nut18PaymentRequestInfo;

    const DEFAULT_DATA_DIR: &str = ".cashu-pocket";

    fn data_dir() -> PathBuf {
        match std::env::var("CASHU_POCKET_DATA_DIR") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => home::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_DATA_DIR),
        }
    }

    async fn load_or_create_mnemonic(dir: &Path) -> Result<Mnemonic, ApiError> {
        let seed_path = dir.join("seed");

        match tokio::fs::read_to_string(&seed_path).await {
            Ok(contents) => Ok(Mnemonic::from_str(contents.trim())?),
            Err(_) => {
                let entropy: [u8; 32] = rand::thread_rng().gen();
                let mnemonic = Mnemonic::from_entropy(&entropy)?;
                tokio::fs::write(&seed_path, mnemonic.to_string()).await?;
                Ok(mnemonic)
            }
        }
    }

    async fn wallet() -> Result<Wallet, ApiError> {
        // no caching for now.  opening the localstore is cheap and this way
        // there is no stale handle to invalidate after an error.
        let prefs = UserPrefs::default();
        let dir = data_dir();
        tokio::fs::create_dir_all(&dir).await?;

        let localstore = WalletSqliteDatabase::new(&dir.join("wallet.sqlite")).await?;
        let mnemonic = load_or_create_mnemonic(&dir).await?;

        Ok(Wallet::new(
            prefs.mint_url(),
            CurrencyUnit::Sat,
            Arc::new(localstore),
            &mnemonic.to_seed_normalized(""),
            None,
        )?)
    }

    pub async fn balance() -> Result<u64, ApiError> {
        let wallet = wallet().await?;
        let balance = wallet.total_balance().await?;
        Ok(balance.into())
    }

    fn build_payment_request(
        mint_url: MintUrl,
        payment_id: String,
        amount: Option<u64>,
        description: Option<String>,
    ) -> PaymentRequest {
        let mut builder = PaymentRequest::builder()
            .payment_id(payment_id)
            .unit(CurrencyUnit::Sat)
            .add_mint(mint_url);
        if let Some(amount) = amount {
            builder = builder.amount(amount);
        }
        if let Some(description) = description {
            builder = builder.description(description);
        }
        builder.build()
    }

    pub fn create_nut18_payment_request(
        amount: Option<u64>,
        description: Option<String>,
    ) -> Result<Nut18PaymentRequestInfo, ApiError> {
        let prefs = UserPrefs::default();
        let mint_url = MintUrl::from_str(prefs.mint_url())?;
        let payment_id = format!("{:08x}", rand::thread_rng().gen::<u32>());

        let request = build_payment_request(mint_url, payment_id, amount, description);

        Ok(Nut18PaymentRequestInfo {
            request: request.to_string(),
            mints: request
                .mints
                .as_ref()
                .map(|mints| mints.iter().map(ToString::to_string).collect()),
            amount: request.amount.map(u64::from),
        })
    }

    pub async fn create_bolt11_invoice(
        amount: u64,
        description: Option<String>,
    ) -> Result<Bolt11InvoiceInfo, ApiError> {
        anyhow::ensure!(amount > 0, "invoice amount must be a positive number of sats");

        let wallet = wallet().await?;
        let quote = wallet.mint_quote(Amount::from(amount), description).await?;

        Ok(Bolt11InvoiceInfo {
            request: quote.request,
            mint_url: Some(quote.mint_url.to_string()),
            amount: quote.amount.map(u64::from),
            expiry: quote.expiry,
        })
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn built_request_roundtrips_through_encoding() {
            let mint_url = MintUrl::from_str("https://mint.example.com").expect("valid mint url");
            let request = build_payment_request(
                mint_url.clone(),
                "b7a90176".to_string(),
                Some(100),
                Some("coffee".to_string()),
            );

            let encoded = request.to_string();
            assert!(encoded.starts_with("creqA"));

            let decoded = PaymentRequest::from_str(&encoded).expect("valid payment request");
            assert_eq!(decoded.payment_id.as_deref(), Some("b7a90176"));
            assert_eq!(decoded.amount, Some(Amount::from(100)));
            assert_eq!(decoded.unit, Some(CurrencyUnit::Sat));
            assert_eq!(decoded.mints, Some(vec![mint_url]));
            assert_eq!(decoded.description.as_deref(), Some("coffee"));
        }

        #[test]
        fn amount_and_description_are_omitted_when_absent() {
            let mint_url = MintUrl::from_str("https://mint.example.com").expect("valid mint url");
            let request = build_payment_request(mint_url, "7f4a2b39".to_string(), None, None);

            assert_eq!(request.amount, None);
            assert_eq!(request.description, None);

            let decoded =
                PaymentRequest::from_str(&request.to_string()).expect("valid payment request");
            assert_eq!(decoded.amount, None);
            assert_eq!(decoded.description, None);
        }
    }
}
