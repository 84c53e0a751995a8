//=============================================================================
// File: src/components/qr_code.rs
//=============================================================================
use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

#[derive(Props, Clone, PartialEq)]
pub struct QrCodeProps {
    pub data: String,
    #[props(optional)]
    pub tooltip: Option<String>,
    #[props(optional)]
    pub caption: Option<String>,
}

#[allow(non_snake_case)]
pub fn QrCode(props: QrCodeProps) -> Element {
    // Byte mode, as-is: encoded payment requests are case-sensitive.
    match QrCode::with_error_correction_level(props.data.as_bytes(), EcLevel::L) {
        Ok(code) => {
            let image = code.render::<svg::Color>().min_dimensions(200, 200).build();

            let tooltip_text = props.tooltip.as_deref().unwrap_or(&props.data);

            rsx! {
                figure {
                    style: "margin: 0;",
                    div {
                        title: "{tooltip_text}",
                        dangerous_inner_html: "{image}"
                    }
                    if let Some(caption_text) = &props.caption {
                        figcaption {
                            style: "text-align: center; font-size: 14px; margin-top: 8px;",
                            "{caption_text}"
                        }
                    }
                }
            }
        }
        Err(e) => rsx! {
            p {
                style: "color: red; font-family: sans-serif; font-size: 14px; border: 1px solid red; padding: 10px; border-radius: 5px;",
                "Error generating QR code: {e}"
            }
        },
    }
}
