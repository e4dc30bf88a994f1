use itertools::Itertools;
use thiserror::Error;

use crate::rotation::Rotation;

#[derive(Debug, Clone, Error)]
#[error("Unknown rotation: ({0}). Valid rotations are: {valid}", valid = valid_names())]
pub struct UnknownRotation(pub String);

fn valid_names() -> String {
    Rotation::ALL.iter().map(|rotation| rotation.name()).join(", ")
}
