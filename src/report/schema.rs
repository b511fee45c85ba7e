//! Skeleton of the output document.
//!
//! Role summaries live in an arena of slots with stable indices; the
//! company → role-name nesting and the role-id lookup both address slots by
//! index. Distribution resolves a role id straight to its slot instead of
//! rescanning the nested maps for every review.

use crate::model::{OutputData, Role, RoleSummary};
use std::collections::{BTreeMap, HashMap};

/// The mutable accumulator the transform builds one run's output in.
#[derive(Debug, Default)]
pub struct Schema {
    /// Summary slots. Indices stay valid for the life of the run.
    slots: Vec<RoleSummary>,
    /// Company name → role name → slot index.
    companies: BTreeMap<String, BTreeMap<String, usize>>,
    /// Role id → slot index. Built once, replaces per-review linear scans.
    by_role_id: HashMap<i64, usize>,
}

impl Schema {
    /// Build the empty skeleton: one zeroed summary per role descriptor.
    ///
    /// Two roles sharing a company and role name overwrite each other (last
    /// write wins); the displaced role's id stops resolving, so its reviews
    /// get dropped downstream. Duplicate role ids keep the first mapping.
    pub fn from_roles(roles: &[Role]) -> Self {
        let mut schema = Self::default();

        for role in roles {
            let by_name = schema.companies.entry(role.company.clone()).or_default();

            match by_name.get(&role.role) {
                Some(&slot) => {
                    // Same company + role name seen twice: reuse the slot so
                    // no orphan summary leaks into the output.
                    let displaced = schema.slots[slot].id;
                    if schema.by_role_id.get(&displaced) == Some(&slot) {
                        schema.by_role_id.remove(&displaced);
                    }
                    schema.slots[slot] = RoleSummary::empty(role.role.as_str(), role.role_id);
                    schema.by_role_id.entry(role.role_id).or_insert(slot);
                }
                None => {
                    let slot = schema.slots.len();
                    schema.slots.push(RoleSummary::empty(role.role.as_str(), role.role_id));
                    by_name.insert(role.role.clone(), slot);
                    schema.by_role_id.entry(role.role_id).or_insert(slot);
                }
            }
        }

        schema
    }

    /// Look up a role's summary by its id.
    pub fn find_role(&self, role_id: i64) -> Option<&RoleSummary> {
        self.by_role_id.get(&role_id).map(|&slot| &self.slots[slot])
    }

    /// Mutable lookup; `None` means the id matches no known role.
    pub fn find_role_mut(&mut self, role_id: i64) -> Option<&mut RoleSummary> {
        let slot = *self.by_role_id.get(&role_id)?;
        Some(&mut self.slots[slot])
    }

    /// Apply `f` to every role summary.
    pub fn for_each_role_mut<F: FnMut(&mut RoleSummary)>(&mut self, mut f: F) {
        for summary in &mut self.slots {
            f(summary);
        }
    }

    /// Number of role summaries in the skeleton.
    pub fn role_count(&self) -> usize {
        self.slots.len()
    }

    /// Consume the arena into the nested output document.
    pub fn into_output(self) -> OutputData {
        let mut slots: Vec<Option<RoleSummary>> = self.slots.into_iter().map(Some).collect();

        let companies = self
            .companies
            .into_iter()
            .map(|(company, roles)| {
                let roles = roles
                    .into_iter()
                    .map(|(name, slot)| {
                        // Each live slot is referenced by exactly one
                        // (company, role name) pair.
                        let summary = slots[slot].take().unwrap_or_else(|| {
                            unreachable!("slot {slot} referenced twice")
                        });
                        (name, summary)
                    })
                    .collect();
                (company, roles)
            })
            .collect();

        OutputData { companies }
    }
}
