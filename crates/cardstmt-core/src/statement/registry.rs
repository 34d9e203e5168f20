//! Ordered issuer signature → extractor mapping.

use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use crate::error::ExtractionError;
use crate::models::config::IssuerConfig;

use super::rules::{IssuerProfile, builtin_profiles, compile_signature};
use super::{FieldExtractor, PatternExtractor, Result};

/// One registered issuer.
#[derive(Clone)]
pub struct RegistryEntry {
    signature: String,
    matcher: Regex,
    extractor: Arc<dyn FieldExtractor>,
}

impl RegistryEntry {
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn issuer(&self) -> &str {
        self.extractor.issuer()
    }

    pub fn extractor(&self) -> &dyn FieldExtractor {
        self.extractor.as_ref()
    }

    /// Case-insensitive search for the signature anywhere in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("signature", &self.signature)
            .field("issuer", &self.issuer())
            .finish()
    }
}

/// Issuers in priority order. Earlier entries win when several signatures match.
///
/// Built once at startup; shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct IssuerRegistry {
    entries: Vec<RegistryEntry>,
}

impl IssuerRegistry {
    /// Empty registry; every document will be unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// The five built-in issuers.
    pub fn builtin() -> Result<Self> {
        Self::from_profiles(builtin_profiles())
    }

    /// Compile profiles in order.
    pub fn from_profiles<'a>(profiles: impl IntoIterator<Item = &'a IssuerProfile>) -> Result<Self> {
        let mut registry = Self::new();
        for profile in profiles {
            registry.register_profile(profile)?;
        }
        Ok(registry)
    }

    /// Built-in and config-defined issuers in configured order.
    pub fn from_config(config: &IssuerConfig) -> Result<Self> {
        let builtin: &[IssuerProfile] = if config.include_builtin {
            builtin_profiles()
        } else {
            &[]
        };

        let registry = if config.custom_first {
            Self::from_profiles(config.custom.iter().chain(builtin))?
        } else {
            Self::from_profiles(builtin.iter().chain(&config.custom))?
        };

        debug!("Built issuer registry with {} entries", registry.len());
        Ok(registry)
    }

    /// Append an issuer with the lowest priority so far.
    pub fn register(
        &mut self,
        signature: impl Into<String>,
        extractor: Arc<dyn FieldExtractor>,
    ) -> Result<()> {
        let signature = signature.into();
        if signature.trim().is_empty() {
            return Err(ExtractionError::EmptySignature(extractor.issuer().to_string()));
        }

        let matcher = compile_signature(&signature).map_err(|reason| {
            ExtractionError::InvalidPattern {
                issuer: extractor.issuer().to_string(),
                field: "signature".to_string(),
                reason,
            }
        })?;

        self.entries.push(RegistryEntry {
            signature,
            matcher,
            extractor,
        });
        Ok(())
    }

    /// Compile a profile and register it under its own signature.
    pub fn register_profile(&mut self, profile: &IssuerProfile) -> Result<()> {
        let extractor = PatternExtractor::compile(profile)?;
        self.register(profile.signature.clone(), Arc::new(extractor))
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(
        mut self,
        signature: impl Into<String>,
        extractor: Arc<dyn FieldExtractor>,
    ) -> Result<Self> {
        self.register(signature, extractor)?;
        Ok(self)
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::rules::{FieldRule, ValueShape};

    #[test]
    fn test_builtin_registry() {
        let registry = IssuerRegistry::builtin().unwrap();
        let signatures: Vec<&str> = registry.entries().iter().map(|e| e.signature()).collect();

        assert_eq!(
            signatures,
            vec!["HDFC Bank", "ICICI Bank", "Chase", "American Express", "Citi"]
        );
        assert_eq!(registry.entries()[3].issuer(), "American Express");
    }

    #[test]
    fn test_empty_signature_rejected() {
        let profile = IssuerProfile::new("Blank", "   ");
        let err = IssuerRegistry::new().register_profile(&profile).unwrap_err();
        assert!(matches!(err, ExtractionError::EmptySignature(ref name) if name == "Blank"));
    }

    #[test]
    fn test_config_order() {
        let custom = IssuerProfile::new("Axis", "Axis Bank")
            .last4_digits(FieldRule::new("Card No", ValueShape::Digits(4)));

        let mut config = IssuerConfig {
            include_builtin: true,
            custom: vec![custom],
            custom_first: false,
        };
        let registry = IssuerRegistry::from_config(&config).unwrap();
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.entries()[5].issuer(), "Axis");

        config.custom_first = true;
        let registry = IssuerRegistry::from_config(&config).unwrap();
        assert_eq!(registry.entries()[0].issuer(), "Axis");

        config.include_builtin = false;
        let registry = IssuerRegistry::from_config(&config).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_signature_is_literal() {
        let mut registry = IssuerRegistry::new();
        registry
            .register_profile(&IssuerProfile::new("Dotted", "A.B. Card"))
            .unwrap();

        let entry = &registry.entries()[0];
        assert!(entry.matches("issued by a.b. card services"));
        assert!(!entry.matches("issued by AxBx Card services"));
    }
}
