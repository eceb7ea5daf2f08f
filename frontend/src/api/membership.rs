//! Typed fetch wrapper for the payment backend.
//!
//! Every operation is a direct request/response pair with the ambient
//! session cookie attached. Non-success responses are mapped through
//! `api_error_message` with a per-operation fallback; transport errors
//! propagate their own message unchanged.

use gloo_net::http::Request;
use jjx_shared::{
    CheckoutSessionResponse, MembershipPlan, MembershipPlansResponse, MembershipStatus,
    MessageResponse, StripeConfig,
    api::{API_BASE, api_error_message},
};
use serde_json::json;
use web_sys::RequestCredentials;

#[derive(Clone, Debug, PartialEq)]
pub struct MembershipApi {
    base_url: String,
}

impl MembershipApi {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/stripe{}", self.base_url, path)
    }

    /// Publishable key, only needed when embedding a payment widget.
    pub async fn stripe_config(&self) -> Result<StripeConfig, String> {
        self.get(&self.url("/config"), "Failed to get Stripe configuration")
            .await
    }

    pub async fn membership_plans(&self) -> Result<Vec<MembershipPlan>, String> {
        let resp: MembershipPlansResponse = self
            .get(
                &self.url("/membership/plans"),
                "Failed to get membership plans",
            )
            .await?;
        Ok(resp.plans)
    }

    pub async fn membership_status(&self) -> Result<MembershipStatus, String> {
        self.get(&self.url("/membership/status"), "Request failed")
            .await
    }

    /// Returns the hosted checkout URL. The caller performs a full browser
    /// redirect to it; payment never touches this client.
    pub async fn create_checkout_session(&self, plan_id: &str) -> Result<String, String> {
        let resp = Request::post(&self.url("/membership/create-checkout-session"))
            .credentials(RequestCredentials::Include)
            .json(&json!({ "plan_id": plan_id }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let body: CheckoutSessionResponse =
            Self::parse(resp, "Failed to create checkout session").await?;
        Ok(body.checkout_url)
    }

    /// Cancellation acknowledgement only; the caller must re-fetch status
    /// afterward, there is no server push.
    pub async fn cancel_membership(&self) -> Result<String, String> {
        let resp = Request::post(&self.url("/membership/cancel"))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let body: MessageResponse = Self::parse(resp, "Failed to cancel membership").await?;
        Ok(body.message)
    }

    /// Reconcile membership creation after the processor redirects back.
    pub async fn verify_payment(&self, session_id: &str) -> Result<String, String> {
        let resp = Request::post(&self.url("/membership/verify-payment"))
            .credentials(RequestCredentials::Include)
            .json(&json!({ "session_id": session_id }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let body: MessageResponse = Self::parse(resp, "Failed to verify payment").await?;
        Ok(body.message)
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        fallback: &str,
    ) -> Result<T, String> {
        let resp = Request::get(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::parse(resp, fallback).await
    }

    async fn parse<T: serde::de::DeserializeOwned>(
        resp: gloo_net::http::Response,
        fallback: &str,
    ) -> Result<T, String> {
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(api_error_message(&body, fallback));
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
}

impl Default for MembershipApi {
    fn default() -> Self {
        Self::new()
    }
}
