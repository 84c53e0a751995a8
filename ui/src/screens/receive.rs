//=============================================================================
// File: src/screens/receive.rs
//=============================================================================
use api::{Bolt11InvoiceInfo, Nut18PaymentRequestInfo};
use chrono::TimeZone;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::copy_button::CopyButton;
use crate::components::pico::{Button, ButtonType, Card, Input};
use crate::components::qr_code::QrCode;

/// Which kind of receive request the user is building.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::EnumIs)]
pub enum ReceiveMode {
    #[default]
    Cashu,
    Lightning,
}

const MODES: [ReceiveMode; 2] = [ReceiveMode::Cashu, ReceiveMode::Lightning];

impl ReceiveMode {
    fn label(&self) -> &'static str {
        match self {
            ReceiveMode::Cashu => "Cashu",
            ReceiveMode::Lightning => "Lightning",
        }
    }
}

/// Amount validation failures, carrying their user-facing messages.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
enum AmountError {
    #[error("Enter the amount in sats for a Lightning invoice.")]
    LightningAmountRequired,
    #[error("Lightning invoices require a whole number of sats.")]
    LightningWholeNumber,
    #[error("Enter a whole number of sats.")]
    WholeNumber,
}

/// Lightning invoices need a positive whole number of sats.
fn validate_lightning_amount(input: &str) -> Result<u64, AmountError> {
    let trimmed = input.trim();
    let numeric: f64 = trimmed
        .parse()
        .map_err(|_| AmountError::LightningAmountRequired)?;
    if numeric.is_nan() || numeric <= 0.0 {
        return Err(AmountError::LightningAmountRequired);
    }
    trimmed
        .parse()
        .map_err(|_| AmountError::LightningWholeNumber)
}

/// Cashu requests may omit the amount; when present it must be a whole,
/// non-negative number of sats.
fn validate_cashu_amount(input: &str) -> Result<Option<u64>, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let numeric: f64 = trimmed.parse().map_err(|_| AmountError::WholeNumber)?;
    if numeric < 0.0 {
        return Err(AmountError::WholeNumber);
    }
    trimmed.parse().map(Some).map_err(|_| AmountError::WholeNumber)
}

/// The description only travels when its field is visible and non-blank.
fn normalize_description(show_description: bool, description: &str) -> Option<String> {
    let trimmed = description.trim();
    (show_description && !trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Helper structure holding the validated parameters of one generation call.
#[derive(Clone, Debug, PartialEq, Eq)]
enum GenerateTask {
    Cashu {
        amount: Option<u64>,
        description: Option<String>,
    },
    Lightning {
        amount: u64,
        description: Option<String>,
    },
}

/// A generation result, tagged with the slot it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Generated {
    Cashu(Nut18PaymentRequestInfo),
    Lightning(Bolt11InvoiceInfo),
}

// Consolidated function that performs the actual server call.
async fn run_generate_task(task: GenerateTask) -> Result<Generated, api::ApiError> {
    match task {
        GenerateTask::Cashu {
            amount,
            description,
        } => Ok(Generated::Cashu(
            api::create_nut18_payment_request(amount, description).await?,
        )),
        GenerateTask::Lightning {
            amount,
            description,
        } => Ok(Generated::Lightning(
            api::create_bolt11_invoice(amount, description).await?,
        )),
    }
}

/// The receive form while it is being edited. Each mode keeps its own last
/// generated request, so switching back and forth loses nothing.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
struct ReceiveForm {
    mode: ReceiveMode,
    amount: String,
    description: String,
    show_description: bool,
    error: Option<String>,
    cashu_request: Option<Nut18PaymentRequestInfo>,
    lightning_invoice: Option<Bolt11InvoiceInfo>,
}

impl ReceiveForm {
    fn switch_mode(&mut self, mode: ReceiveMode) {
        self.mode = mode;
        self.error = None;
    }

    /// Validates the form and captures the parameters for a generation call.
    fn generate_task(&self) -> Result<GenerateTask, AmountError> {
        let description = normalize_description(self.show_description, &self.description);
        match self.mode {
            ReceiveMode::Cashu => Ok(GenerateTask::Cashu {
                amount: validate_cashu_amount(&self.amount)?,
                description,
            }),
            ReceiveMode::Lightning => Ok(GenerateTask::Lightning {
                amount: validate_lightning_amount(&self.amount)?,
                description,
            }),
        }
    }

    fn apply_generated(&mut self, generated: Generated) {
        match generated {
            Generated::Cashu(request) => self.cashu_request = Some(request),
            Generated::Lightning(invoice) => self.lightning_invoice = Some(invoice),
        }
        self.error = None;
    }

    /// A failed call surfaces a generic message and keeps whatever was
    /// generated before it.
    fn apply_failure(&mut self) {
        self.error = Some(
            match self.mode {
                ReceiveMode::Cashu => "Unable to create a Cashu payment request.",
                ReceiveMode::Lightning => "Unable to create a Lightning invoice.",
            }
            .to_string(),
        );
    }

    fn qr_value(&self) -> &str {
        match self.mode {
            ReceiveMode::Cashu => self.cashu_request.as_ref().map(|r| r.request.as_str()),
            ReceiveMode::Lightning => self
                .lightning_invoice
                .as_ref()
                .map(|i| i.request.as_str()),
        }
        .unwrap_or("")
    }

    fn mint_label(&self, default_mint: Option<&str>) -> String {
        let from_request = match self.mode {
            ReceiveMode::Cashu => self
                .cashu_request
                .as_ref()
                .and_then(|r| r.mints.as_ref())
                .filter(|mints| !mints.is_empty())
                .map(|mints| mints.join(", ")),
            ReceiveMode::Lightning => self
                .lightning_invoice
                .as_ref()
                .and_then(|i| i.mint_url.clone()),
        };
        from_request.unwrap_or_else(|| default_mint.unwrap_or("").to_string())
    }

    fn display_amount(&self) -> Option<u64> {
        match self.mode {
            ReceiveMode::Cashu => self.cashu_request.as_ref().and_then(|r| r.amount),
            ReceiveMode::Lightning => self.lightning_invoice.as_ref().and_then(|i| i.amount),
        }
    }

    fn formatted_expiry(&self) -> Option<String> {
        if !self.mode.is_lightning() {
            return None;
        }
        let invoice = self.lightning_invoice.as_ref()?;
        let expires_at = chrono::Local
            .timestamp_opt(invoice.expiry as i64, 0)
            .single()?;
        Some(expires_at.format("%c").to_string())
    }
}

#[component]
pub fn ReceiveScreen(on_back: EventHandler<MouseEvent>) -> Element {
    let state = use_context::<AppState>();

    let mut form = use_signal(ReceiveForm::default);
    let mut is_generating = use_signal(|| false);

    let mode = use_memo(move || form.read().mode);
    let qr_value = use_memo(move || form.read().qr_value().to_string());
    let mint_label = use_memo(move || form.read().mint_label(state.default_mint.as_deref()));
    let display_amount = use_memo(move || form.read().display_amount());
    let formatted_expiry = use_memo(move || form.read().formatted_expiry());
    let error = use_memo(move || form.read().error.clone());
    let show_description = use_memo(move || form.read().show_description);

    let amount_label = if mode().is_lightning() {
        "Amount (sats)"
    } else {
        "Optional amount (sats)"
    };
    let amount_placeholder = if mode().is_lightning() {
        "Enter amount"
    } else {
        "Add an amount"
    };

    rsx! {
        Card {
            h2 {
                "Receive"
            }

            div {
                style: "display: flex; gap: 0.5rem; margin-bottom: 1rem;",
                for m in MODES {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: mode() != m,
                        disabled: is_generating(),
                        on_click: move |_| form.with_mut(|f| f.switch_mode(m)),
                        "{m.label()}"
                    }
                }
            }

            Input {
                label: "{amount_label}",
                name: "receive-amount",
                input_type: "number".to_string(),
                placeholder: "{amount_placeholder}",
                value: "{form.read().amount}",
                disabled: is_generating(),
                on_input: move |evt: FormEvent| {
                    form.with_mut(|f| f.amount = evt.value());
                },
            }

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                p {
                    style: "margin-bottom: 0; color: var(--pico-muted-color);",
                    "Optional details"
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    disabled: is_generating(),
                    on_click: move |_| form.with_mut(|f| f.show_description = !f.show_description),
                    if show_description() {
                        "Hide description"
                    } else {
                        "Add description"
                    }
                }
            }

            if show_description() {
                Input {
                    label: "Description",
                    name: "receive-description",
                    placeholder: "Add a note for the payer",
                    value: "{form.read().description}",
                    disabled: is_generating(),
                    on_input: move |evt: FormEvent| {
                        form.with_mut(|f| f.description = evt.value());
                    },
                }
            }

            if !mint_label().is_empty() {
                p {
                    style: "color: var(--pico-muted-color);",
                    "Mint: {mint_label}"
                }
            }

            if let Some(amount) = display_amount() {
                p {
                    style: "color: var(--pico-muted-color);",
                    "Amount: "
                    strong { "{amount} sats" }
                }
            }

            if let Some(expiry) = formatted_expiry() {
                p {
                    style: "color: var(--pico-muted-color);",
                    "Expires: {expiry}"
                }
            }

            if let Some(message) = error() {
                small {
                    style: "color: var(--pico-color-red-500);",
                    "{message}"
                }
            }

            div {
                style: "display: flex; justify-content: center; padding: 1.5rem 0;",
                if qr_value().is_empty() {
                    div {
                        style: "
                            display: grid;
                            place-items: center;
                            width: 220px;
                            min-height: 220px;
                            padding: 1rem;
                            text-align: center;
                            color: var(--pico-muted-color);
                            border: 2px dashed var(--pico-card-border-color);
                            border-radius: var(--pico-border-radius);
                        ",
                        span {
                            "Generate a {mode().label()} request to preview the QR code"
                        }
                    }
                } else {
                    QrCode {
                        data: qr_value(),
                        caption: "Scan the QR code to pay this request.".to_string(),
                    }
                }
            }

            Button {
                disabled: is_generating(),
                on_click: move |_| {
                    form.with_mut(|f| f.error = None);
                    let task = form.read().generate_task();
                    match task {
                        Err(err) => form.with_mut(|f| f.error = Some(err.to_string())),
                        Ok(task) => {
                            is_generating.set(true);
                            spawn({
                                let mut form = form;
                                let mut is_generating = is_generating;
                                async move {
                                    match run_generate_task(task).await {
                                        Ok(generated) => {
                                            form.with_mut(|f| f.apply_generated(generated));
                                        }
                                        Err(err) => {
                                            dioxus_logger::tracing::error!(
                                                "failed to create receive request: {err}"
                                            );
                                            form.with_mut(|f| f.apply_failure());
                                        }
                                    }
                                    is_generating.set(false);
                                }
                            });
                        }
                    }
                },
                if is_generating() {
                    "Generating…"
                } else {
                    "Generate"
                }
            }

            div {
                style: "display: flex; gap: 1rem; margin-top: 1rem;",
                CopyButton {
                    text_to_copy: qr_value(),
                    label: "Copy request".to_string(),
                    disabled: qr_value().is_empty(),
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |evt| on_back.call(evt),
                    "Cancel"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cashu_info(request: &str, mints: Option<Vec<&str>>, amount: Option<u64>) -> Nut18PaymentRequestInfo {
        Nut18PaymentRequestInfo {
            request: request.to_string(),
            mints: mints.map(|m| m.into_iter().map(str::to_string).collect()),
            amount,
        }
    }

    fn lightning_info(request: &str, amount: Option<u64>) -> Bolt11InvoiceInfo {
        Bolt11InvoiceInfo {
            request: request.to_string(),
            mint_url: Some("https://mint.example.com".to_string()),
            amount,
            expiry: 1_700_000_000,
        }
    }

    #[test]
    fn lightning_amount_must_be_a_positive_whole_number() {
        assert_eq!(
            validate_lightning_amount(""),
            Err(AmountError::LightningAmountRequired)
        );
        assert_eq!(
            validate_lightning_amount("abc"),
            Err(AmountError::LightningAmountRequired)
        );
        assert_eq!(
            validate_lightning_amount("0"),
            Err(AmountError::LightningAmountRequired)
        );
        assert_eq!(
            validate_lightning_amount("-5"),
            Err(AmountError::LightningAmountRequired)
        );
        assert_eq!(
            validate_lightning_amount("1.5"),
            Err(AmountError::LightningWholeNumber)
        );
        assert_eq!(validate_lightning_amount("1000"), Ok(1000));
        assert_eq!(validate_lightning_amount(" 42 "), Ok(42));
    }

    #[test]
    fn cashu_amount_is_optional_but_must_be_whole_when_present() {
        assert_eq!(validate_cashu_amount(""), Ok(None));
        assert_eq!(validate_cashu_amount("   "), Ok(None));
        assert_eq!(validate_cashu_amount("0"), Ok(Some(0)));
        assert_eq!(validate_cashu_amount("250"), Ok(Some(250)));
        assert_eq!(validate_cashu_amount("-5"), Err(AmountError::WholeNumber));
        assert_eq!(validate_cashu_amount("1.5"), Err(AmountError::WholeNumber));
        assert_eq!(validate_cashu_amount("abc"), Err(AmountError::WholeNumber));
    }

    #[test]
    fn description_requires_visibility_and_content() {
        assert_eq!(normalize_description(false, "a note"), None);
        assert_eq!(normalize_description(true, "   "), None);
        assert_eq!(
            normalize_description(true, "  a note  "),
            Some("a note".to_string())
        );
    }

    #[test]
    fn validation_failures_block_the_call_and_carry_a_message() {
        let form = ReceiveForm {
            mode: ReceiveMode::Lightning,
            amount: "-5".to_string(),
            ..Default::default()
        };
        let err = form.generate_task().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Enter the amount in sats for a Lightning invoice."
        );

        let form = ReceiveForm {
            mode: ReceiveMode::Cashu,
            amount: "-5".to_string(),
            ..Default::default()
        };
        let err = form.generate_task().unwrap_err();
        assert_eq!(err.to_string(), "Enter a whole number of sats.");
    }

    #[test]
    fn generate_task_captures_the_normalized_description() {
        let mut form = ReceiveForm {
            mode: ReceiveMode::Cashu,
            description: "  for lunch  ".to_string(),
            show_description: true,
            ..Default::default()
        };
        assert_eq!(
            form.generate_task(),
            Ok(GenerateTask::Cashu {
                amount: None,
                description: Some("for lunch".to_string()),
            })
        );

        // Hiding the field drops the text from the call without clearing it.
        form.show_description = false;
        assert_eq!(
            form.generate_task(),
            Ok(GenerateTask::Cashu {
                amount: None,
                description: None,
            })
        );
        assert_eq!(form.description, "  for lunch  ");
    }

    #[test]
    fn switching_mode_clears_the_error_and_keeps_both_slots() {
        let mut form = ReceiveForm::default();
        form.apply_generated(Generated::Cashu(cashu_info("creqA123", None, None)));
        form.error = Some("Unable to create a Cashu payment request.".to_string());

        form.switch_mode(ReceiveMode::Lightning);
        assert_eq!(form.error, None);
        assert_eq!(form.qr_value(), "");

        form.apply_generated(Generated::Lightning(lightning_info("lnbc1abc", Some(1000))));
        assert_eq!(form.qr_value(), "lnbc1abc");

        form.switch_mode(ReceiveMode::Cashu);
        assert_eq!(form.qr_value(), "creqA123");
    }

    #[test]
    fn success_fills_the_slot_and_clears_the_error() {
        let mut form = ReceiveForm {
            mode: ReceiveMode::Lightning,
            error: Some("Unable to create a Lightning invoice.".to_string()),
            ..Default::default()
        };
        form.apply_generated(Generated::Lightning(lightning_info("lnbc1abc", Some(1000))));

        assert_eq!(form.error, None);
        assert_eq!(form.qr_value(), "lnbc1abc");
        assert_eq!(form.display_amount(), Some(1000));
        assert!(form.formatted_expiry().is_some());
    }

    #[test]
    fn failure_sets_the_error_and_leaves_the_previous_value_alone() {
        let mut form = ReceiveForm::default();

        // First-ever failure: still nothing to show.
        form.apply_failure();
        assert_eq!(
            form.error.as_deref(),
            Some("Unable to create a Cashu payment request.")
        );
        assert_eq!(form.qr_value(), "");

        // A later failure keeps the previously generated request.
        form.apply_generated(Generated::Cashu(cashu_info("creqA123", None, None)));
        form.apply_failure();
        assert_eq!(form.qr_value(), "creqA123");

        form.mode = ReceiveMode::Lightning;
        form.apply_failure();
        assert_eq!(
            form.error.as_deref(),
            Some("Unable to create a Lightning invoice.")
        );
    }

    #[test]
    fn mint_label_prefers_the_request_and_falls_back_to_the_default() {
        let mut form = ReceiveForm::default();
        assert_eq!(form.mint_label(Some("https://fallback.mint")), "https://fallback.mint");
        assert_eq!(form.mint_label(None), "");

        form.apply_generated(Generated::Cashu(cashu_info(
            "creqA123",
            Some(vec!["https://mint.one", "https://mint.two"]),
            None,
        )));
        assert_eq!(
            form.mint_label(Some("https://fallback.mint")),
            "https://mint.one, https://mint.two"
        );

        // An empty mint list is treated like no mint list.
        form.apply_generated(Generated::Cashu(cashu_info("creqA456", Some(vec![]), None)));
        assert_eq!(form.mint_label(Some("https://fallback.mint")), "https://fallback.mint");

        form.switch_mode(ReceiveMode::Lightning);
        form.apply_generated(Generated::Lightning(lightning_info("lnbc1abc", None)));
        assert_eq!(
            form.mint_label(Some("https://fallback.mint")),
            "https://mint.example.com"
        );
    }

    #[test]
    fn expiry_only_renders_for_lightning() {
        let mut form = ReceiveForm::default();
        form.apply_generated(Generated::Lightning(lightning_info("lnbc1abc", None)));
        assert_eq!(form.formatted_expiry(), None);

        form.switch_mode(ReceiveMode::Lightning);
        assert!(form.formatted_expiry().is_some());
    }
}
