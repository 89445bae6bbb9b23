use serde::Serialize;
use time::{OffsetDateTime, macros::format_description};

use crate::{config::Config, gateway::checksum};

const CURRENCY: &str = "ZAR";
const LOCALE: &str = "en-za";
const COUNTRY: &str = "ZAF";

/// Request fields for the PayWeb3 initiate call.
///
/// Declaration order is load-bearing: it is both the checksum concatenation
/// order and the order the form body is serialized in. Optional fields the
/// merchant does not use stay empty strings, contributing zero characters to
/// the checksum source.
#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct InitiatePayload {
    paygate_id: String,
    reference: String,
    /// Amount in cents, rendered as a plain integer string.
    amount: String,
    currency: String,
    return_url: String,
    transaction_date: String,
    locale: String,
    country: String,
    email: String,
    pay_method: String,
    pay_method_detail: String,
    notify_url: String,
    user1: String,
    user2: String,
    user3: String,
    vault: String,
    vault_id: String,
    checksum: String,
}

impl InitiatePayload {
    pub fn build(
        reference: String,
        amount_cents: u64,
        email: &str,
        user1: &str,
        config: &Config,
    ) -> Self {
        // Local offset can be unavailable (multi-threaded process on some
        // platforms); the gateway accepts either as long as the checksum and
        // the field agree.
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self::build_at(reference, amount_cents, email, user1, config, now)
    }

    fn build_at(
        reference: String,
        amount_cents: u64,
        email: &str,
        user1: &str,
        config: &Config,
        now: OffsetDateTime,
    ) -> Self {
        let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
        let transaction_date = now.format(&format).expect("timestamp format is infallible");
        let mut payload = Self {
            paygate_id: config.paygate_id.clone(),
            reference,
            amount: amount_cents.to_string(),
            currency: CURRENCY.to_string(),
            return_url: config.return_url(),
            transaction_date,
            locale: LOCALE.to_string(),
            country: COUNTRY.to_string(),
            email: email.to_string(),
            pay_method: String::new(),
            pay_method_detail: String::new(),
            notify_url: config.notify_url(),
            user1: user1.to_string(),
            user2: String::new(),
            user3: String::new(),
            vault: String::new(),
            vault_id: String::new(),
            checksum: String::new(),
        };
        payload.checksum = checksum::compute(&payload.checksum_fields(), &config.paygate_key);
        payload
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Every field except the checksum itself, in protocol order.
    fn checksum_fields(&self) -> [&str; 17] {
        [
            &self.paygate_id,
            &self.reference,
            &self.amount,
            &self.currency,
            &self.return_url,
            &self.transaction_date,
            &self.locale,
            &self.country,
            &self.email,
            &self.pay_method,
            &self.pay_method_detail,
            &self.notify_url,
            &self.user1,
            &self.user2,
            &self.user3,
            &self.vault,
            &self.vault_id,
        ]
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn test_config() -> Config {
        Config {
            paygate_id: "10011072130".to_string(),
            paygate_key: "secret".to_string(),
            base_url: "https://example.test".to_string(),
            port: 3000,
        }
    }

    #[test]
    fn golden_initiate_checksum() {
        let payload = InitiatePayload::build_at(
            "PGTEST-GEN-1700000000000".to_string(),
            3299,
            "customer@example.test",
            "CHAUFFEUR_DRIVE",
            &test_config(),
            datetime!(2018-01-01 12:00:00 UTC),
        );
        assert_eq!(payload.checksum, "2eb31689b1caf4b0e865ceaf5d42539b");
    }

    #[test]
    fn checksum_source_has_no_separators_or_placeholders() {
        let payload = InitiatePayload::build_at(
            "SAFARI-GEN-1".to_string(),
            1000,
            "",
            "LUXURY_SAFARI",
            &test_config(),
            datetime!(2018-01-01 12:00:00 UTC),
        );
        assert_eq!(
            payload.checksum_fields().concat(),
            "10011072130SAFARI-GEN-11000ZARhttps://example.test/pay/return\
             2018-01-01 12:00:00en-zaZAFhttps://example.test/pay/notifyLUXURY_SAFARI"
        );
    }

    #[test]
    fn form_body_preserves_declaration_order() {
        let payload = InitiatePayload::build_at(
            "SAFARI-GEN-1".to_string(),
            1000,
            "a@b.test",
            "LUXURY_SAFARI",
            &test_config(),
            datetime!(2018-01-01 12:00:00 UTC),
        );
        let body = serde_urlencoded::to_string(&payload).unwrap();
        let keys: Vec<&str> = body
            .split('&')
            .map(|pair| pair.split_once('=').unwrap().0)
            .collect();
        assert_eq!(
            keys,
            [
                "PAYGATE_ID",
                "REFERENCE",
                "AMOUNT",
                "CURRENCY",
                "RETURN_URL",
                "TRANSACTION_DATE",
                "LOCALE",
                "COUNTRY",
                "EMAIL",
                "PAY_METHOD",
                "PAY_METHOD_DETAIL",
                "NOTIFY_URL",
                "USER1",
                "USER2",
                "USER3",
                "VAULT",
                "VAULT_ID",
                "CHECKSUM",
            ]
        );
    }

    #[test]
    fn amount_is_integer_cents() {
        let payload = InitiatePayload::build_at(
            "SAFARI-GEN-1".to_string(),
            2000,
            "",
            "LUXURY_SAFARI",
            &test_config(),
            datetime!(2024-06-01 09:30:00 UTC),
        );
        assert_eq!(payload.amount, "2000");
        assert_eq!(payload.transaction_date, "2024-06-01 09:30:00");
    }
}
