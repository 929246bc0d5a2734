//! Tag-to-operation registry.
//!
//! Operations are registered explicitly, once, when a registry is built.
//! [`OpRegistry::global`] returns a process-wide registry holding every
//! operation this crate ships; callers that need a different set build
//! their own with [`OpRegistry::new`] and [`OpRegistry::register`].

use super::{Secp256k1Commitment, UnaryOp};

use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::debug;

static GLOBAL: OnceLock<OpRegistry> = OnceLock::new();

/// Errors raised while reading an operation tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeserializationError {
    #[error("unexpected end of input while reading an operation tag")]
    UnexpectedEnd,

    #[error("unknown unary op tag 0x{0:02x}")]
    UnknownTag(u8),
}

/// Errors raised while populating a registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("tag 0x{tag:02x} is already registered to {existing}")]
    DuplicateTag { tag: u8, existing: &'static str },
}

/// Mapping from tag byte to operation instance.
#[derive(Debug, Default)]
pub struct OpRegistry {
    ops: BTreeMap<u8, Box<dyn UnaryOp>>,
}

impl OpRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every operation provided by this crate.
    pub fn with_builtin_ops() -> Self {
        let mut registry = Self::new();

        let builtin: [Box<dyn UnaryOp>; 1] = [Box::new(Secp256k1Commitment)];
        for op in builtin {
            registry.ops.insert(op.tag(), op);
        }

        registry
    }

    /// The process-wide registry, built on first use.
    pub fn global() -> &'static OpRegistry {
        GLOBAL.get_or_init(Self::with_builtin_ops)
    }

    /// Adds `op` under its tag.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateTag`] if the tag is already taken; the
    /// registry is left unchanged.
    pub fn register(&mut self, op: Box<dyn UnaryOp>) -> Result<(), RegistryError> {
        if let Some(existing) = self.ops.get(&op.tag()) {
            return Err(RegistryError::DuplicateTag {
                tag: op.tag(),
                existing: existing.tag_name(),
            });
        }

        debug!(tag = op.tag(), name = op.tag_name(), "registered operation");
        self.ops.insert(op.tag(), op);

        Ok(())
    }

    pub fn get(&self, tag: u8) -> Option<&dyn UnaryOp> {
        self.ops.get(&tag).map(|op| &**op)
    }

    pub fn by_name(&self, name: &str) -> Option<&dyn UnaryOp> {
        self.ops
            .values()
            .find(|op| op.tag_name() == name)
            .map(|op| &**op)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Looks up the operation for an already-read tag byte.
    pub fn deserialize_from_tag(&self, tag: u8) -> Result<&dyn UnaryOp, DeserializationError> {
        self.get(tag).ok_or_else(|| {
            debug!(tag, "unknown operation tag");
            DeserializationError::UnknownTag(tag)
        })
    }

    /// Reads one tag byte from the front of `input` and resolves it.
    ///
    /// On success `input` is advanced past the tag; on failure it is left
    /// untouched.
    pub fn deserialize(&self, input: &mut &[u8]) -> Result<&dyn UnaryOp, DeserializationError> {
        let (&tag, rest) = input
            .split_first()
            .ok_or(DeserializationError::UnexpectedEnd)?;

        let op = self.deserialize_from_tag(tag)?;
        *input = rest;

        Ok(op)
    }
}
