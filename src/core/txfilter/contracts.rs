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

use std::collections::BTreeSet;

/// Contract address allowlist for `MsgExecuteContract`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContractAllowlist {
    /// Contract filtering is off; every address passes.
    Disabled,
    /// Only these addresses pass (empty => none).
    Enabled(BTreeSet<String>),
}

impl ContractAllowlist {
    /// Build from operator settings. `disabled` wins over any listed address.
    pub fn compile<I, S>(contracts: I, disabled: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if disabled {
            return ContractAllowlist::Disabled;
        }
        ContractAllowlist::Enabled(contracts.into_iter().map(Into::into).collect())
    }

    /// True if `contract` may be executed.
    pub fn permits(&self, contract: &str) -> bool {
        match self {
            ContractAllowlist::Disabled => true,
            ContractAllowlist::Enabled(set) => set.contains(contract),
        }
    }

    /// True when filtering is off.
    pub fn is_disabled(&self) -> bool {
        matches!(self, ContractAllowlist::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_ignores_list() {
        let a = ContractAllowlist::compile(["allowedAddress"], true);
        assert!(a.is_disabled());
        assert!(a.permits("anything"));
    }

    #[test]
    fn empty_enabled_denies_all() {
        let a = ContractAllowlist::compile(Vec::<String>::new(), false);
        assert_eq!(a, ContractAllowlist::Enabled(BTreeSet::new()));
        assert!(!a.permits(""));
        assert!(!a.permits("allowedAddress"));
    }

    #[test]
    fn duplicates_collapse() {
        let a = ContractAllowlist::compile(["b", "a", "b"], false);
        match &a {
            ContractAllowlist::Enabled(set) => assert_eq!(set.len(), 2),
            ContractAllowlist::Disabled => panic!("expected enabled"),
        }
        assert!(a.permits("a"));
        assert!(!a.permits("c"));
    }
}
