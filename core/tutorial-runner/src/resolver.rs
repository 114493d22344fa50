//! Command resolver — case-insensitive token → command lookup.

use crate::commands::{
    GetCityForNpanxx, GetIndexedSlicesForCityState, GetRangeSlicesForStateCity,
    GetSliceForAreaCodeCity, GetSliceForNpanxx, GetSliceForStateCity, MultigetSliceForNpanxx,
    TutorialCommand,
};
use crate::context::ConnectionContext;
use tracing::error;
use tutorial_core::client::Keyspace;

/// The fixed set of example queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Get,
    GetSlice,
    GetRangeSlices,
    GetSliceAcc,
    GetSliceSc,
    MultigetSlice,
    GetIndexedSlices,
}

impl CommandKind {
    pub const ALL: [CommandKind; 7] = [
        CommandKind::Get,
        CommandKind::GetSlice,
        CommandKind::GetRangeSlices,
        CommandKind::GetSliceAcc,
        CommandKind::GetSliceSc,
        CommandKind::MultigetSlice,
        CommandKind::GetIndexedSlices,
    ];

    /// Canonical (lower-case) token.
    pub fn token(self) -> &'static str {
        match self {
            CommandKind::Get => "get",
            CommandKind::GetSlice => "get_slice",
            CommandKind::GetRangeSlices => "get_range_slices",
            CommandKind::GetSliceAcc => "get_slice_acc",
            CommandKind::GetSliceSc => "get_slice_sc",
            CommandKind::MultigetSlice => "multiget_slice",
            CommandKind::GetIndexedSlices => "get_indexed_slices",
        }
    }

    /// Case-insensitive match against the table.
    ///
    /// Case folding is ASCII-only: the tokens are plain ASCII, and non-ASCII
    /// look-alikes such as `ſ` (long s) never match.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.token().eq_ignore_ascii_case(token))
    }

    /// Build the command bound to `keyspace`.
    pub fn instantiate(self, keyspace: &Keyspace) -> Box<dyn TutorialCommand + '_> {
        match self {
            CommandKind::Get => Box::new(GetCityForNpanxx::new(keyspace)),
            CommandKind::GetSlice => Box::new(GetSliceForNpanxx::new(keyspace)),
            CommandKind::GetRangeSlices => Box::new(GetRangeSlicesForStateCity::new(keyspace)),
            CommandKind::GetSliceAcc => Box::new(GetSliceForAreaCodeCity::new(keyspace)),
            CommandKind::GetSliceSc => Box::new(GetSliceForStateCity::new(keyspace)),
            CommandKind::MultigetSlice => Box::new(MultigetSliceForNpanxx::new(keyspace)),
            CommandKind::GetIndexedSlices => Box::new(GetIndexedSlicesForCityState::new(keyspace)),
        }
    }
}

/// Resolve `token` to a command bound to `context`.
///
/// On a miss, logs one error naming the token and returns `None`; the caller
/// skips execution.
pub fn load_command<'a>(
    token: &str,
    context: &'a ConnectionContext,
) -> Option<Box<dyn TutorialCommand + 'a>> {
    match CommandKind::from_token(token) {
        Some(kind) => Some(kind.instantiate(context.keyspace())),
        None => {
            error!("No match found for {}.", token);
            None
        }
    }
}
