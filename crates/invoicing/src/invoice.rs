use serde::{Deserialize, Serialize};

use theater_core::{PlayId, ValueObject};

/// A single billed performance: which play, for how many seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID")]
    pub play_id: PlayId,
    pub audience: u32,
}

impl ValueObject for Performance {}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// Invoice: customer plus performances in billing order.
///
/// Performance order only determines the order of statement lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    customer: String,
    performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn performances(&self) -> &[Performance] {
        &self.performances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_performance_order() {
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
                Performance::new("othello", 40),
            ],
        );

        let ids: Vec<&str> = invoice
            .performances()
            .iter()
            .map(|p| p.play_id.as_str())
            .collect();
        assert_eq!(ids, ["hamlet", "as-like", "othello"]);
        assert_eq!(invoice.customer(), "BigCo");
    }

    #[test]
    fn deserializes_play_id_field() {
        let invoice: Invoice = serde_json::from_str(
            r#"{
                "customer": "BigCo",
                "performances": [{"playID": "hamlet", "audience": 55}]
            }"#,
        )
        .unwrap();
        assert_eq!(invoice, Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]));
    }

    #[test]
    fn negative_audience_is_rejected_at_the_boundary() {
        let result = serde_json::from_str::<Performance>(r#"{"playID": "hamlet", "audience": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_invoice_has_no_performances() {
        let invoice: Invoice = serde_json::from_str(r#"{"customer": "Nobody", "performances": []}"#).unwrap();
        assert!(invoice.performances().is_empty());
    }
}
