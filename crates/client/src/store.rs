//! Refetch-generation store for the member list.
//!
//! Guards against stale reads: every fetch is tagged with the generation
//! it started at, and its results are applied only if that generation is
//! still current on completion. Starting a newer fetch or recording a
//! mutation bumps the generation, so slow responses that were superseded
//! are discarded instead of overwriting fresher state.

use kintree_core::member::FamilyMember;
use kintree_core::DbId;

/// Handle identifying the generation a fetch started at. Must be
/// presented back to [`MemberStore::apply_fetch`] with the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Holds the last accepted member list and the generation counter.
#[derive(Debug, Default)]
pub struct MemberStore {
    members: Vec<FamilyMember>,
    generation: u64,
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The member list as of the last accepted fetch.
    pub fn members(&self) -> &[FamilyMember] {
        &self.members
    }

    /// Look up a member in the current list.
    pub fn get(&self, id: DbId) -> Option<&FamilyMember> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Mark the start of a fetch. Supersedes any fetch still in flight.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.generation += 1;
        FetchToken(self.generation)
    }

    /// Apply fetch results unless a newer fetch or a mutation superseded
    /// them. Returns `true` when the results were accepted.
    pub fn apply_fetch(&mut self, token: FetchToken, members: Vec<FamilyMember>) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.members = members;
        true
    }

    /// Record a local mutation (create, update, delete, swap). Any fetch
    /// begun before this point is discarded when it completes.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
