use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::client::ClientId;

/// Client-side quote number. The server reassigns the definitive per-user
/// sequence on creation, so the number in the payload is a request hint and
/// the one in the response is authoritative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuoteNumber(pub u32);

impl std::fmt::Display for QuoteNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of a quote. Unit prices are sent as JSON numbers, matching what
/// the `/orcamento/criar` endpoint parses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub quantidade: u32,
    pub descricao: String,
    #[serde(rename = "precoUnitario", with = "rust_decimal::serde::float")]
    pub preco_unitario: Decimal,
}

impl Default for LineItem {
    fn default() -> Self {
        Self { quantidade: 1, descricao: String::new(), preco_unitario: Decimal::ZERO }
    }
}

impl LineItem {
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantidade) * self.preco_unitario
    }
}

pub fn total(items: &[LineItem]) -> Decimal {
    items.iter().map(LineItem::subtotal).sum()
}

/// Transient request body for `POST /orcamento/criar`. Built once at submit
/// time from the session's line items and discarded after the call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    pub cliente_id: ClientId,
    pub num_orc: QuoteNumber,
    pub data_emissao: DateTime<Utc>,
    pub itens: Vec<LineItem>,
}

impl QuotePayload {
    pub fn new(
        cliente_id: ClientId,
        num_orc: QuoteNumber,
        data_emissao: DateTime<Utc>,
        itens: Vec<LineItem>,
    ) -> Self {
        Self { cliente_id, num_orc, data_emissao, itens }
    }
}

/// Quote record as returned by the creation endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub num_orc: QuoteNumber,
    pub data_emissao: DateTime<Utc>,
    #[serde(default)]
    pub itens: Vec<LineItem>,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub valor_total: Decimal,
}
