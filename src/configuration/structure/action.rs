use serde::Deserialize;

use crate::configuration::{
    errors::ConfigurationResolutionError,
    traits::ResolvableConfiguration,
};


#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub(crate) struct UnresolvedActionCompositionConfiguration {
    controller_annotations_first: bool,

    execute_action_creator_first: bool,
}


/// Ordering flags for composed actions.
#[derive(Clone, Debug)]
pub struct ActionCompositionConfiguration {
    /// Whether controller-level annotations run before method-level ones.
    pub controller_annotations_first: bool,

    /// Whether the action created by the action creator runs before
    /// annotation-derived actions.
    pub execute_action_creator_first: bool,
}

impl ResolvableConfiguration for UnresolvedActionCompositionConfiguration {
    type Resolved = ActionCompositionConfiguration;

    fn resolve(self) -> Result<Self::Resolved, ConfigurationResolutionError> {
        Ok(ActionCompositionConfiguration {
            controller_annotations_first: self.controller_annotations_first,
            execute_action_creator_first: self.execute_action_creator_first,
        })
    }
}
