// Copyright (c) 2026 Amunchain
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Ante handler pipeline.
//!
//! Decorators run in registration order. Each one receives a [`Next`] continuation and
//! either calls it (forward) or returns an error (reject). The chain end accepts.

use thiserror::Error;

use crate::core::txfilter::TxFilterError;
use crate::core::types::{ChainCtx, Tx};

/// Ante pipeline errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AnteError {
    /// Rejected by the tx filter.
    #[error(transparent)]
    TxFilter(#[from] TxFilterError),
    /// Rejected by another stage.
    #[error("{0}")]
    Rejected(String),
}

/// A single pipeline stage.
pub trait AnteDecorator: Send + Sync {
    /// Inspect `tx` and either forward through `next` or reject.
    fn ante_handle(&self, ctx: &ChainCtx, tx: &Tx, next: Next<'_>) -> Result<(), AnteError>;
}

/// Remaining stages after the current decorator.
pub struct Next<'a> {
    rest: &'a [Box<dyn AnteDecorator>],
}

impl<'a> Next<'a> {
    /// Continuation with no further stages.
    pub fn end() -> Self {
        Self { rest: &[] }
    }

    /// Run the remaining stages.
    pub fn run(self, ctx: &ChainCtx, tx: &Tx) -> Result<(), AnteError> {
        match self.rest.split_first() {
            Some((head, rest)) => head.ante_handle(ctx, tx, Next { rest }),
            None => Ok(()),
        }
    }
}

/// Ordered chain of decorators.
#[derive(Default)]
pub struct AnteChain {
    decorators: Vec<Box<dyn AnteDecorator>>,
}

impl AnteChain {
    /// Empty chain (accepts everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage.
    pub fn with(mut self, decorator: impl AnteDecorator + 'static) -> Self {
        self.decorators.push(Box::new(decorator));
        self
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    /// True when no stage is registered.
    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }

    /// Run `tx` through every stage.
    pub fn handle(&self, ctx: &ChainCtx, tx: &Tx) -> Result<(), AnteError> {
        Next { rest: &self.decorators }.run(ctx, tx)
    }
}
