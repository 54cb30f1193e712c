//! Lead record construction and normalization.

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lead::validation::{self, ValidationError};

/// Raw submission fields as they arrive on the wire.
///
/// Every field is optional at this stage; validation decides which are
/// required. `service` is nominally one of the values offered by the form,
/// but the service list is not enforced here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitPayload {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
    pub zip_code: Option<String>,
    pub financing: Option<String>,
}

/// The normalized representation of a form submission.
///
/// Immutable once constructed; forwarded to sinks as JSON and then
/// discarded. Never persisted by this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub zip_code: String,
    pub financing: String,

    /// Stamped at receipt time.
    pub submitted_at: DateTime<Utc>,

    /// Originating referrer header, or "direct".
    pub referrer: String,

    /// Submitter network address.
    pub ip: String,
}

impl LeadRecord {
    /// Validate raw fields and build the normalized record.
    ///
    /// Name and message are trimmed; email is trimmed and lowercased; phone
    /// and zip are trimmed; service and financing pass through verbatim.
    /// Absent optionals become empty strings.
    pub fn from_payload(
        payload: SubmitPayload,
        referrer: String,
        ip: IpAddr,
    ) -> Result<Self, ValidationError> {
        validation::check(&payload)?;

        let SubmitPayload {
            full_name,
            email,
            phone,
            service,
            message,
            zip_code,
            financing,
        } = payload;

        Ok(Self {
            full_name: full_name.unwrap_or_default().trim().to_string(),
            email: email.unwrap_or_default().trim().to_lowercase(),
            phone: phone.unwrap_or_default().trim().to_string(),
            service: service.unwrap_or_default(),
            message: message.unwrap_or_default().trim().to_string(),
            zip_code: zip_code.unwrap_or_default().trim().to_string(),
            financing: financing.unwrap_or_default(),
            submitted_at: Utc::now(),
            referrer,
            ip: ip.to_string(),
        })
    }
}
