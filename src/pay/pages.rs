//! Static HTML rendering. Pure data-to-markup functions, no business logic.

use crate::{
    gateway::PayWeb3Gateway,
    pay::{Benefit, TransactionStatus},
};

/// Minimal escape for values interpolated into markup or attributes.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      min-height: 100vh;
      display: flex;
      align-items: center;
      justify-content: center;
      padding: 20px;
    }
    .container {
      background: white;
      border-radius: 16px;
      box-shadow: 0 4px 12px rgba(0,0,0,0.2);
      max-width: 500px;
      width: 100%;
      padding: 40px;
      text-align: center;
    }
    h1 { color: #333; font-size: 28px; margin-bottom: 10px; }
    .subtitle { color: #666; margin-bottom: 30px; font-size: 14px; }
    .form-group { margin-bottom: 20px; text-align: left; }
    label { display: block; color: #333; font-weight: 600; margin-bottom: 8px; font-size: 14px; }
    input {
      width: 100%;
      padding: 12px 16px;
      border: 2px solid #e0e0e0;
      border-radius: 8px;
      font-size: 16px;
    }
    button, .button {
      display: inline-block;
      width: 100%;
      padding: 14px;
      background: #333;
      color: white;
      border: none;
      border-radius: 8px;
      font-size: 16px;
      font-weight: 600;
      cursor: pointer;
      text-decoration: none;
    }
    .card {
      display: block;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      border-radius: 16px;
      padding: 30px;
      margin-bottom: 20px;
      text-decoration: none;
      color: white;
    }
    .card h2 { font-size: 22px; margin-bottom: 8px; }
    .card p { font-size: 14px; opacity: 0.9; }
    .details { background: #f8f9fa; border-radius: 12px; padding: 20px; margin-bottom: 30px; text-align: left; }
    .detail-row { display: flex; justify-content: space-between; padding: 10px 0; border-bottom: 1px solid #e0e0e0; }
    .detail-row:last-child { border-bottom: none; }
    .detail-label { color: #666; font-size: 14px; font-weight: 600; }
    .detail-value { color: #333; font-size: 14px; font-family: monospace; }
    .status-icon {
      width: 90px; height: 90px; border-radius: 50%;
      color: white; font-size: 50px; line-height: 90px;
      margin: 0 auto 30px;
    }
    .footer { margin-top: 30px; color: #999; font-size: 13px; }
"#;

fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>"#
    )
}

pub fn landing() -> String {
    let cards: String = Benefit::ALL
        .iter()
        .map(|benefit| {
            format!(
                r#"      <a href="/pay/{slug}" class="card">
        <h2>{name}</h2>
        <p>{tagline}</p>
      </a>
"#,
                slug = benefit.slug(),
                name = benefit.display_name(),
                tagline = benefit.tagline(),
            )
        })
        .collect();
    document(
        "Payment Gateway",
        &format!(
            r#"  <div class="container">
    <h1>Payment Gateway</h1>
    <p class="subtitle">Select a payment option to continue</p>
{cards}    <div class="footer">Secure payment powered by PayGate</div>
  </div>"#
        ),
    )
}

pub fn intake_form(benefit: Benefit) -> String {
    let name = benefit.display_name();
    document(
        &format!("Payment - {name}"),
        &format!(
            r#"  <div class="container">
    <h1>{name}</h1>
    <p class="subtitle">Enter your payment details</p>
    <form action="/pay/{slug}" method="GET">
      <div class="form-group">
        <label>Amount (Rands)</label>
        <input type="number" name="amount" step="0.01" min="1" required placeholder="0.00" autofocus>
      </div>
      <div class="form-group">
        <label>Member ID</label>
        <input type="text" name="memberId" placeholder="Enter your member ID" required>
      </div>
      <div class="form-group">
        <label>Email</label>
        <input type="email" name="email" placeholder="your@email.com" required>
      </div>
      <button type="submit">Proceed to Payment</button>
    </form>
    <div class="footer">Secure payment powered by PayGate</div>
  </div>"#,
            slug = benefit.slug(),
        ),
    )
}

/// Auto-submitting form that hands the payer's browser over to the hosted
/// payment page with the two fields the initiate call returned.
pub fn redirect_form(pay_request_id: &str, checksum: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
  <body onload="document.forms[0].submit()">
    <form method="post" action="{process_url}">
      <input type="hidden" name="PAY_REQUEST_ID" value="{pay_request_id}" />
      <input type="hidden" name="CHECKSUM" value="{checksum}" />
      <noscript><button type="submit">Continue</button></noscript>
    </form>
  </body>
</html>"#,
        process_url = PayWeb3Gateway::PROCESS_URL,
        pay_request_id = escape(pay_request_id),
        checksum = escape(checksum),
    )
}

pub fn status_page(
    status: TransactionStatus,
    reference: Option<&str>,
    transaction_id: Option<&str>,
) -> String {
    let (title, message, color, icon, label) = match status {
        TransactionStatus::Approved => (
            "Payment Approved!",
            "Your payment has been successfully processed.",
            "#10b981",
            "✓",
            "APPROVED",
        ),
        TransactionStatus::Declined => (
            "Payment Declined",
            "Unfortunately, your payment was declined. Please try again or use a different payment method.",
            "#ef4444",
            "✗",
            "DECLINED",
        ),
        TransactionStatus::Pending => (
            "Payment Pending",
            "Your payment is being processed. You will receive a confirmation shortly.",
            "#f59e0b",
            "⏱",
            "PENDING",
        ),
    };

    let mut rows = String::new();
    if let Some(reference) = reference {
        rows.push_str(&format!(
            r#"      <div class="detail-row">
        <span class="detail-label">Reference:</span>
        <span class="detail-value">{}</span>
      </div>
"#,
            escape(reference)
        ));
    }
    if let Some(transaction_id) = transaction_id {
        rows.push_str(&format!(
            r#"      <div class="detail-row">
        <span class="detail-label">Transaction ID:</span>
        <span class="detail-value">{}</span>
      </div>
"#,
            escape(transaction_id)
        ));
    }
    let details = if rows.is_empty() {
        String::new()
    } else {
        format!(
            r#"    <div class="details">
{rows}      <div class="detail-row">
        <span class="detail-label">Status:</span>
        <span class="detail-value" style="color: {color}; font-weight: bold;">{label}</span>
      </div>
    </div>
"#
        )
    };

    document(
        title,
        &format!(
            r#"  <div class="container">
    <div class="status-icon" style="background: {color};">{icon}</div>
    <h1>{title}</h1>
    <p class="subtitle">{message}</p>
{details}    <a href="/" class="button">Return to Home</a>
  </div>"#
        ),
    )
}
