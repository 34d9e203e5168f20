//! Issuer identification by signature lookup.

use tracing::debug;

use super::{IssuerRegistry, RegistryEntry};

/// Result of scanning text for issuer signatures.
#[derive(Debug, Clone, Copy)]
pub enum Identification<'r> {
    /// The first registry entry whose signature occurs in the text.
    Issuer(&'r RegistryEntry),
    /// No signature occurs in the text.
    Unknown,
}

impl<'r> Identification<'r> {
    /// Issuer name, or `None` when unknown.
    pub fn issuer(&self) -> Option<&'r str> {
        match self {
            Identification::Issuer(entry) => Some(entry.issuer()),
            Identification::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Identification::Unknown)
    }
}

/// Scans text against a registry in priority order.
#[derive(Debug, Clone, Copy)]
pub struct IssuerIdentifier<'r> {
    registry: &'r IssuerRegistry,
}

impl<'r> IssuerIdentifier<'r> {
    pub fn new(registry: &'r IssuerRegistry) -> Self {
        Self { registry }
    }

    /// First registered signature occurring anywhere in `text` wins.
    ///
    /// Documents naming several issuers (e.g. a co-branded card or a payment
    /// network mention) resolve to whichever is registered first.
    pub fn identify(&self, text: &str) -> Identification<'r> {
        if text.is_empty() {
            return Identification::Unknown;
        }

        match self.registry.entries().iter().find(|entry| entry.matches(text)) {
            Some(entry) => {
                debug!("Identified as {} via {:?}", entry.issuer(), entry.signature());
                Identification::Issuer(entry)
            }
            None => Identification::Unknown,
        }
    }
}
