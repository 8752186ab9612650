use crate::types::lenient::null_as_default;
use crate::types::BlockId;
use serde::Deserialize;

/// Common fields for all blocks
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlockCommon {
    pub id: BlockId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_children: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub archived: bool,
}

impl BlockCommon {
    pub fn new(id: BlockId) -> Self {
        Self {
            id,
            has_children: false,
            archived: false,
        }
    }
}
