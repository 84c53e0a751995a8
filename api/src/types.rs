//! Serializable results returned by the receive server functions.

use serde::Deserialize;
use serde::Serialize;

/// An encoded NUT-18 payment request together with the display fields the
/// client renders alongside the QR code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nut18PaymentRequestInfo {
    /// The `creq...` encoded payment request.
    pub request: String,
    /// Mints the request is payable to, if any were embedded.
    pub mints: Option<Vec<String>>,
    /// Requested amount in sats, if one was embedded.
    pub amount: Option<u64>,
}

/// A bolt11 mint quote, reduced to what the client renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bolt11InvoiceInfo {
    /// The `lnbc...` encoded invoice.
    pub request: String,
    /// URL of the mint that issued the quote.
    pub mint_url: Option<String>,
    /// Invoice amount in sats.
    pub amount: Option<u64>,
    /// Unix timestamp (seconds) at which the invoice expires.
    pub expiry: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_request_info_json_roundtrip() {
        let info = Nut18PaymentRequestInfo {
            request: "creqAo2FpaDdmNGEyYjM5YXVjc2F0YW2BeBhodHRwczovL21pbnQuZXhhbXBsZS5jb20=".to_string(),
            mints: Some(vec!["https://mint.example.com".to_string()]),
            amount: Some(21),
        };

        let json = serde_json::to_string(&info).expect("serializes");
        let back: Nut18PaymentRequestInfo = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(info, back);
    }

    #[test]
    fn invoice_info_json_roundtrip() {
        let info = Bolt11InvoiceInfo {
            request: "lnbc100n1p5z3a63pp56854ytysg7e5z9fl3w5mgvrlqjfcytnjv8ff5hm5qt6gl6alxesq".to_string(),
            mint_url: Some("https://mint.example.com".to_string()),
            amount: Some(10),
            expiry: 1_700_000_000,
        };

        let json = serde_json::to_string(&info).expect("serializes");
        let back: Bolt11InvoiceInfo = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(info, back);
    }
}
