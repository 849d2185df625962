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
#![deny(missing_docs)]

//! Allowed message pattern.
//!
//! ## Target syntax
//! Each operator target is a dotted name without the leading slash of a type URL:
//!
//! ```text
//! cosmos                          -> prefix   ^/cosmos\.
//! cosmos.bank                     -> prefix   ^/cosmos\.bank\.
//! cosmos.bank.v1beta1             -> prefix   ^/cosmos\.bank\.v1beta1\.
//! cosmos.bank.v1beta1.MsgSend     -> exact    ^/cosmos\.bank\.v1beta1\.MsgSend$
//! ```
//!
//! Targets with 5 or more segments are rejected. Rules are OR-combined into a single
//! expression, compiled once.

use regex::Regex;

use super::PolicyError;

/// Max dot-separated segments in a target (`namespace.module.version.Msg`).
const MAX_TARGET_SEGMENTS: usize = 4;

/// Compiled allowlist of message type URLs.
///
/// The deny-all pattern holds no expression at all, so it cannot match anything
/// (including the empty string).
#[derive(Clone, Debug)]
pub struct AllowedMsgPattern {
    regex: Option<Regex>,
}

impl AllowedMsgPattern {
    /// Pattern that matches nothing.
    pub fn deny_all() -> Self {
        Self { regex: None }
    }

    /// Compile operator targets. An empty list yields [`AllowedMsgPattern::deny_all`].
    pub fn compile<I, S>(targets: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = Vec::new();
        for target in targets {
            rules.push(target_rule(target.as_ref())?);
        }
        if rules.is_empty() {
            return Ok(Self::deny_all());
        }

        let regex = Regex::new(&rules.join("|")).map_err(PolicyError::Pattern)?;
        Ok(Self { regex: Some(regex) })
    }

    /// True if `type_url` is allowed.
    pub fn is_match(&self, type_url: &str) -> bool {
        match &self.regex {
            // Prefix rules need at least `/x.`, so `""` never matches.
            Some(re) => re.is_match(type_url),
            None => false,
        }
    }

    /// Source of the compiled expression, `None` for deny-all.
    pub fn as_str(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }

    /// True if this pattern rejects every type URL.
    pub fn is_deny_all(&self) -> bool {
        self.regex.is_none()
    }
}

impl Default for AllowedMsgPattern {
    fn default() -> Self {
        Self::deny_all()
    }
}

fn target_rule(target: &str) -> Result<String, PolicyError> {
    let segments = target.split('.').count();
    let escaped = regex::escape(target);
    match segments {
        1..=3 => Ok(format!(r"(^/{escaped}\.)")),
        MAX_TARGET_SEGMENTS => Ok(format!(r"(^/{escaped}$)")),
        _ => Err(PolicyError::InvalidTarget {
            target: target.to_string(),
            segments,
        }),
    }
}
