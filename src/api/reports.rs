use chrono::NaiveDate;
use serde::Deserialize;

use super::ApiClient;
use crate::error::ClientError;
use crate::models::{DebtRow, PaymentRow, Summary};
use crate::session::Session;

#[derive(Deserialize)]
struct DebtsResponse {
    #[serde(default)]
    debts: Vec<DebtRow>,
}

#[derive(Deserialize)]
struct PaymentsResponse {
    #[serde(default)]
    payments: Vec<PaymentRow>,
}

impl ApiClient {
    pub async fn get_summary(&self, session: &Session) -> Result<Summary, ClientError> {
        self.get("getSummary", Some(&session.token), &[]).await
    }

    /// Outstanding balances across all active enrollments.
    pub async fn debt_report(&self, session: &Session) -> Result<Vec<DebtRow>, ClientError> {
        let resp: DebtsResponse = self.get("debtReport", Some(&session.token), &[]).await?;
        Ok(resp.debts)
    }

    /// Payments over an optional date range (inclusive on both ends).
    pub async fn payment_report(
        &self,
        session: &Session,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<PaymentRow>, ClientError> {
        let mut params = Vec::new();
        if let Some(from) = from {
            params.push(("from", from.to_string()));
        }
        if let Some(to) = to {
            params.push(("to", to.to_string()));
        }
        let resp: PaymentsResponse = self
            .get("paymentReport", Some(&session.token), &params)
            .await?;
        Ok(resp.payments)
    }
}
