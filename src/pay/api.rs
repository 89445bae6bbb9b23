use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    gateway::{checksum, initiate::InitiatePayload},
    pay::{Benefit, TransactionStatus, pages},
    state::AppState,
};

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", get(home))
        .route("/pay/return", get(pay_return))
        .route("/pay/notify", post(pay_notify))
        .route("/pay/{benefit}", get(pay))
}

async fn home() -> Html<String> {
    Html(pages::landing())
}

#[derive(Debug, Deserialize)]
struct PayParams {
    amount: Option<String>,
    #[serde(rename = "memberId")]
    member_id: Option<String>,
    email: Option<String>,
}

/// Rand-denominated decimal amount to cents, rounded half-up at the cent
/// boundary. Zero, negative and non-numeric amounts are rejected.
fn parse_amount_cents(amount: &str) -> Option<u64> {
    let rands: f64 = amount.trim().parse().ok()?;
    if !rands.is_finite() || rands <= 0.0 {
        return None;
    }
    Some((rands * 100.0).round() as u64)
}

fn now_millis() -> i128 {
    time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}

#[instrument(skip_all, fields(benefit = %slug))]
async fn pay(
    State(AppState { config, gate }): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<PayParams>,
) -> Response {
    let Some(benefit) = Benefit::from_slug(&slug) else {
        return (StatusCode::NOT_FOUND, "Unknown payment option").into_response();
    };
    // Without an amount this is the intake step; the gateway is not involved.
    let Some(amount) = params.amount else {
        return Html(pages::intake_form(benefit)).into_response();
    };
    let Some(amount_cents) = parse_amount_cents(&amount) else {
        return (
            StatusCode::BAD_REQUEST,
            "Error: Please provide a valid amount greater than 0.",
        )
            .into_response();
    };
    let member_id = params
        .member_id
        .as_deref()
        .filter(|m| !m.is_empty())
        .unwrap_or("GEN");
    let email = params.email.as_deref().unwrap_or("");
    let reference = format!("{}-{}-{}", benefit.reference_prefix(), member_id, now_millis());

    let payload = InitiatePayload::build(
        reference,
        amount_cents,
        email,
        benefit.product_tag(),
        &config,
    );
    match gate.initiate(&payload).await {
        Ok(init) => {
            tracing::info!(
                reference = payload.reference(),
                amount_cents,
                "Initiated gateway payment"
            );
            Html(pages::redirect_form(&init.pay_request_id, &init.checksum)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to initiate gateway payment: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Initiate failed: {e}"),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
struct ReturnParams {
    #[serde(rename = "PAY_REQUEST_ID")]
    pay_request_id: Option<String>,
    #[serde(rename = "TRANSACTION_STATUS")]
    transaction_status: Option<String>,
    #[serde(rename = "REFERENCE")]
    reference: Option<String>,
    #[serde(rename = "TRANSACTION_ID")]
    transaction_id: Option<String>,
    #[serde(rename = "CHECKSUM")]
    checksum: Option<String>,
}

/// Browser redirect back from the hosted payment page.
///
/// A supplied checksum must verify; a redirect without one still renders the
/// status page. This leg is display-only, the notify leg below is the
/// authoritative (and always-verified) result channel.
#[instrument(skip_all)]
async fn pay_return(
    State(AppState { config, .. }): State<AppState>,
    Query(params): Query<ReturnParams>,
) -> Response {
    if let Some(candidate) = &params.checksum {
        let fields = [
            config.paygate_id.as_str(),
            params.pay_request_id.as_deref().unwrap_or(""),
            params.transaction_status.as_deref().unwrap_or(""),
            params.reference.as_deref().unwrap_or(""),
        ];
        if !checksum::verify(&fields, &config.paygate_key, candidate) {
            tracing::warn!(
                reference = params.reference.as_deref().unwrap_or(""),
                "Rejected return redirect with invalid checksum"
            );
            return (StatusCode::BAD_REQUEST, "Invalid transaction data").into_response();
        }
    }
    let status = TransactionStatus::classify(params.transaction_status.as_deref().unwrap_or("0"));
    Html(pages::status_page(
        status,
        params.reference.as_deref(),
        params.transaction_id.as_deref(),
    ))
    .into_response()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NotifyParams {
    #[serde(rename = "PAYGATE_ID")]
    paygate_id: String,
    #[serde(rename = "PAY_REQUEST_ID")]
    pay_request_id: String,
    #[serde(rename = "REFERENCE")]
    reference: String,
    #[serde(rename = "TRANSACTION_STATUS")]
    transaction_status: String,
    #[serde(rename = "TRANSACTION_ID")]
    transaction_id: String,
    #[serde(rename = "RESULT_CODE")]
    result_code: String,
    #[serde(rename = "AUTH_CODE")]
    auth_code: String,
    #[serde(rename = "AMOUNT")]
    amount: String,
    #[serde(rename = "RESULT_DESC")]
    result_desc: String,
    #[serde(rename = "TRANSACTION_DATE")]
    transaction_date: String,
    #[serde(rename = "CHECKSUM")]
    checksum: String,
}

impl NotifyParams {
    /// Checksum concatenation order for the notify leg. It differs from the
    /// return leg's order; the two must never be conflated. Missing fields
    /// arrive as empty strings via `serde(default)`.
    fn checksum_fields(&self) -> [&str; 10] {
        [
            &self.paygate_id,
            &self.pay_request_id,
            &self.reference,
            &self.transaction_status,
            &self.result_code,
            &self.auth_code,
            &self.amount,
            &self.result_desc,
            &self.transaction_id,
            &self.transaction_date,
        ]
    }
}

/// Server-to-server result delivery. The gateway retries until it reads an
/// `OK` body, so the response contract is exact.
#[instrument(skip_all)]
async fn pay_notify(
    State(AppState { config, .. }): State<AppState>,
    Form(params): Form<NotifyParams>,
) -> (StatusCode, &'static str) {
    if !checksum::verify(
        &params.checksum_fields(),
        &config.paygate_key,
        &params.checksum,
    ) {
        tracing::warn!(
            reference = %params.reference,
            pay_request_id = %params.pay_request_id,
            "Rejected notify with invalid checksum"
        );
        return (StatusCode::BAD_REQUEST, "ERROR");
    }
    tracing::info!(
        reference = %params.reference,
        status = %params.transaction_status,
        transaction_id = %params.transaction_id,
        result_code = %params.result_code,
        amount = %params.amount,
        result_desc = %params.result_desc,
        "Payment notification received"
    );
    (StatusCode::OK, "OK")
}
