//! Request/response envelopes (`proto/interfaces/request_response.proto`).
//!
//! Message-typed fields are `Option`s, so "explicitly set" is observable.
//! Scalar fields carry no presence: an empty string and an unset one are
//! the same thing on the wire.

use crate::codec::{Checker, Payload};
use crate::common::{Dictionary, Variant};
use crate::error::Result;

/// Outcome code shared by every response. Unrecognized wire values are
/// kept as the raw `i32` in the message; the generated getters fall back
/// to [`Status::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Status {
    Unknown = 0,
    Success = 1,
    Failed = 2,
    Timeout = 3,
    Cancelled = 4,
    Pending = 5,
}

impl Status {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Status::Unknown => "STATUS_UNKNOWN",
            Status::Success => "STATUS_SUCCESS",
            Status::Failed => "STATUS_FAILED",
            Status::Timeout => "STATUS_TIMEOUT",
            Status::Cancelled => "STATUS_CANCELLED",
            Status::Pending => "STATUS_PENDING",
        }
    }

    /// True for every status that ends a request.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Unknown | Status::Pending)
    }
}

/// `false` when a raw status value is outside the enumeration, e.g. one
/// written by a newer peer.
pub fn status_is_known(raw: i32) -> bool {
    Status::try_from(raw).is_ok()
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Params {
    /// Seconds.
    #[prost(int32, tag = "1")]
    pub timeout: i32,
    #[prost(string, tag = "2")]
    pub correlation_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub extra: ::core::option::Option<Dictionary>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct ErrorInfo {
    #[prost(string, tag = "1")]
    pub code: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub details: ::prost::alloc::string::String,
    /// Unix seconds.
    #[prost(int64, tag = "4")]
    pub timestamp: i64,
}

impl ErrorInfo {
    /// Stamped with the current time.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: String::new(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResultStatus {
    #[prost(enumeration = "Status", tag = "1")]
    pub status: i32,
    #[prost(message, optional, tag = "2")]
    pub error: ::core::option::Option<ErrorInfo>,
    #[prost(message, optional, tag = "3")]
    pub output: ::core::option::Option<Variant>,
}

impl ResultStatus {
    pub fn success(output: impl Into<Variant>) -> Self {
        Self {
            status: Status::Success as i32,
            error: None,
            output: Some(output.into()),
        }
    }

    pub fn failure(status: Status, error: ErrorInfo) -> Self {
        Self {
            status: status as i32,
            error: Some(error),
            output: None,
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateRequest {
    #[prost(message, optional, tag = "1")]
    pub request_data: ::core::option::Option<Dictionary>,
    #[prost(message, optional, tag = "2")]
    pub params: ::core::option::Option<Params>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateResponse {
    #[prost(enumeration = "Status", tag = "1")]
    pub status: i32,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub resource_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub response_data: ::core::option::Option<Dictionary>,
    #[prost(message, optional, tag = "5")]
    pub error: ::core::option::Option<ErrorInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendRequest {
    #[prost(message, optional, tag = "1")]
    pub message_data: ::core::option::Option<Dictionary>,
    #[prost(string, tag = "2")]
    pub target_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub params: ::core::option::Option<Params>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendResponse {
    #[prost(enumeration = "Status", tag = "1")]
    pub status: i32,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub message_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub response_data: ::core::option::Option<Dictionary>,
    #[prost(message, optional, tag = "5")]
    pub error: ::core::option::Option<ErrorInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryRequest {
    #[prost(string, tag = "1")]
    pub query_id: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub limit: i32,
    #[prost(int32, tag = "3")]
    pub offset: i32,
    #[prost(message, optional, tag = "4")]
    pub query_conditions: ::core::option::Option<Dictionary>,
    #[prost(message, optional, tag = "5")]
    pub params: ::core::option::Option<Params>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryResponse {
    #[prost(enumeration = "Status", tag = "1")]
    pub status: i32,
    #[prost(message, repeated, tag = "2")]
    pub results: ::prost::alloc::vec::Vec<Dictionary>,
    #[prost(int64, tag = "3")]
    pub total_count: i64,
    #[prost(message, optional, tag = "4")]
    pub error: ::core::option::Option<ErrorInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HealthCheckRequest {
    #[prost(string, tag = "1")]
    pub service: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub check_params: ::core::option::Option<Dictionary>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HealthCheckResponse {
    #[prost(enumeration = "Status", tag = "1")]
    pub status: i32,
    #[prost(message, optional, tag = "2")]
    pub details: ::core::option::Option<Dictionary>,
}

impl Payload for Params {
    fn check(&self, checker: &mut Checker) -> Result<()> {
        checker.optional_dictionary(self.extra.as_ref())
    }
}

impl Payload for ErrorInfo {}

impl Payload for ResultStatus {
    fn check(&self, checker: &mut Checker) -> Result<()> {
        self.output.as_ref().map_or(Ok(()), |v| checker.variant(v))
    }
}

impl Payload for CreateRequest {
    fn check(&self, checker: &mut Checker) -> Result<()> {
        checker.optional_dictionary(self.request_data.as_ref())?;
        self.params.as_ref().map_or(Ok(()), |p| p.check(checker))
    }
}

impl Payload for CreateResponse {
    fn check(&self, checker: &mut Checker) -> Result<()> {
        checker.optional_dictionary(self.response_data.as_ref())
    }
}

impl Payload for SendRequest {
    fn check(&self, checker: &mut Checker) -> Result<()> {
        checker.optional_dictionary(self.message_data.as_ref())?;
        self.params.as_ref().map_or(Ok(()), |p| p.check(checker))
    }
}

impl Payload for SendResponse {
    fn check(&self, checker: &mut Checker) -> Result<()> {
        checker.optional_dictionary(self.response_data.as_ref())
    }
}

impl Payload for QueryRequest {
    fn check(&self, checker: &mut Checker) -> Result<()> {
        checker.optional_dictionary(self.query_conditions.as_ref())?;
        self.params.as_ref().map_or(Ok(()), |p| p.check(checker))
    }
}

impl Payload for QueryResponse {
    fn check(&self, checker: &mut Checker) -> Result<()> {
        self.results.iter().try_for_each(|d| checker.dictionary(d))
    }
}

impl Payload for HealthCheckRequest {
    fn check(&self, checker: &mut Checker) -> Result<()> {
        checker.optional_dictionary(self.check_params.as_ref())
    }
}

impl Payload for HealthCheckResponse {
    fn check(&self, checker: &mut Checker) -> Result<()> {
        checker.optional_dictionary(self.details.as_ref())
    }
}
