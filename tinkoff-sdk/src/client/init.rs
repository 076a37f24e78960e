use super::outcome::{CallResult, Cause, Causes};
use super::transport::{Client, decode_response};
use crate::objects::Envelope;
use crate::objects::init::{InitRequest, InitResponse};
use crate::objects::status::STATUS_NEW;

const INIT_PATH: &str = "/Init";

impl Client {
    /// `POST /Init` – create a payment and get its payment page.
    ///
    /// A freshly created payment must be in [`STATUS_NEW`]. The provider
    /// error and a status mismatch are both reported when they occur
    /// together; the decoded response travels with the error.
    pub async fn init(&self, request: &InitRequest) -> CallResult<InitResponse> {
        tracing::debug!(order_id = %request.order_id, amount = request.amount, "Init");

        let resp = self.post_request(INIT_PATH, request).await?;
        let response: InitResponse = decode_response(resp).await?;

        let mut causes = Causes::new();
        if let Some(err) = response.error() {
            causes.push(err);
        }
        if response.status != STATUS_NEW {
            causes.push(Cause::UnexpectedStatus {
                expected: STATUS_NEW,
                actual: response.status.clone(),
            });
        }

        if !causes.is_empty() {
            tracing::warn!(
                order_id = %request.order_id,
                status = %response.status,
                %causes,
                "Init rejected"
            );
        }
        causes.into_result(response)
    }
}
