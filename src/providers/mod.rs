/*!
 * Provider implementations for remote summarization services.
 *
 * This module contains client implementations for summarization backends:
 * - HuggingFace: Hosted inference API (e.g. `facebook/bart-large-cnn`)
 * - Mock: Deterministic in-process provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::app_config::SummaryLength;
use crate::errors::ProviderError;

/// Common trait for all summarization providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be used interchangeably by the summary service.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// The request type for this provider
    type Request: Send + Sync;

    /// The response type for this provider
    type Response: Send + Sync;

    /// Build a summarization request for the given text and length
    fn build_request(&self, text: &str, length: SummaryLength) -> Self::Request;

    /// Complete a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<Self::Response, ProviderError>` - The response from the provider or an error
    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is successful, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Extract the summary text from the provider response
    fn extract_text(response: &Self::Response) -> String;
}

pub mod huggingface;
pub mod mock;
