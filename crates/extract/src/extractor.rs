// ABOUTME: The Extractor orchestrator tying registry, chain executor, deriver, and validator together.
// ABOUTME: Defines the DocumentProvider seam to the external browser-automation collaborator.

use scraper::Html;
use tracing::{debug, warn};

use crate::chain::{self, ChainFailure};
use crate::derive;
use crate::error::ExtractError;
use crate::loader::load_builtin_registry;
use crate::outcome::{ExtractionOutcome, ExtractionRequest, ExtractionStatus};
use crate::strategy::{CompiledStrategy, StrategyRegistry};
use crate::validate;

/// The external browser-automation collaborator, seen from the core.
///
/// An implementation owns the session lifecycle: it acquires whatever
/// resources it needs strictly around one fetch and releases them on every
/// exit path. `Ok(None)` means navigation failed and no document exists,
/// which the core treats as a valid absent input. The core calls this at
/// most once per request and never for degraded strategies.
pub trait DocumentProvider {
    fn fetch_document(&self, url: &str) -> Result<Option<Html>, ExtractError>;
}

/// The per-source extraction engine.
///
/// Purely synchronous; one request in, one outcome out. Holds no mutable
/// state, so a single instance serves any number of requests.
pub struct Extractor {
    registry: StrategyRegistry,
}

impl Extractor {
    /// Create a new ExtractorBuilder for configuring the engine.
    pub fn builder() -> ExtractorBuilder {
        ExtractorBuilder::new()
    }

    /// Create an extractor over the given registry.
    pub fn new(registry: StrategyRegistry) -> Self {
        Self { registry }
    }

    /// The registry this extractor resolves strategies from.
    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Extract content for a request, pulling the document from `provider`.
    ///
    /// Degraded strategies are resolved before any fetch is attempted and
    /// never invoke the provider.
    pub fn extract_with<P: DocumentProvider>(
        &self,
        request: &ExtractionRequest,
        provider: &P,
    ) -> Result<ExtractionOutcome, ExtractError> {
        let strategy = self.registry.resolve(request.source)?;

        if strategy.spec().degraded {
            return Ok(derive_outcome(request, strategy));
        }

        let document = provider.fetch_document(&request.url)?;
        Ok(run_chain(request, strategy, document.as_ref()))
    }

    /// Extract content for a request from an already-supplied document.
    ///
    /// `None` models a failed navigation; it yields `AllLocatorsFailed`
    /// rather than an error, since a missing page is an expected condition.
    pub fn extract_document(
        &self,
        request: &ExtractionRequest,
        document: Option<&Html>,
    ) -> Result<ExtractionOutcome, ExtractError> {
        let strategy = self.registry.resolve(request.source)?;

        if strategy.spec().degraded {
            return Ok(derive_outcome(request, strategy));
        }

        Ok(run_chain(request, strategy, document))
    }
}

impl Default for Extractor {
    fn default() -> Self {
        ExtractorBuilder::new().build()
    }
}

/// Derive pseudo-content for a degraded strategy. No document is involved.
fn derive_outcome(request: &ExtractionRequest, strategy: &CompiledStrategy) -> ExtractionOutcome {
    match derive::derive(&request.url) {
        Some(title) => {
            debug!(source = %request.source, url = %request.url, "derived title from url slug");
            validate::validate(&title, strategy)
        }
        None => {
            warn!(source = %request.source, url = %request.url, "url slug yielded no derivable title");
            ExtractionOutcome::failure(ExtractionStatus::DerivationFailed)
        }
    }
}

/// Drive the locator chain over a document and finish through the validator.
fn run_chain(
    request: &ExtractionRequest,
    strategy: &CompiledStrategy,
    document: Option<&Html>,
) -> ExtractionOutcome {
    let Some(doc) = document else {
        warn!(source = %request.source, url = %request.url, "no document supplied");
        return ExtractionOutcome::failure(ExtractionStatus::AllLocatorsFailed);
    };

    match chain::run(doc, strategy) {
        Ok(text) => validate::validate(&text, strategy),
        Err(ChainFailure::NoMatch) => {
            warn!(source = %request.source, url = %request.url, "all locators failed");
            ExtractionOutcome::failure(ExtractionStatus::AllLocatorsFailed)
        }
        Err(ChainFailure::BelowMinimum) => {
            warn!(source = %request.source, url = %request.url, "extracted text below minimum length");
            ExtractionOutcome::failure(ExtractionStatus::BelowMinimumLength)
        }
    }
}

/// Builder for constructing Extractor instances with custom configuration.
#[derive(Debug, Default)]
pub struct ExtractorBuilder {
    registry: Option<StrategyRegistry>,
}

impl ExtractorBuilder {
    /// Create a new ExtractorBuilder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom strategy registry instead of the builtin one.
    pub fn registry(mut self, registry: StrategyRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the Extractor with the configured settings.
    pub fn build(self) -> Extractor {
        Extractor::new(self.registry.unwrap_or_else(load_builtin_registry))
    }
}
