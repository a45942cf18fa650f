//! Parser module — XML description files to members, members to records.

pub mod bridgesupport;
pub mod members;

use crate::model::{CompletionRecord, InterfaceFile};

/// All completion records of one file, in member order.
pub fn records(file: InterfaceFile) -> impl Iterator<Item = CompletionRecord> {
    file.members
        .into_iter()
        .flat_map(|member| members::parse(&member))
}
