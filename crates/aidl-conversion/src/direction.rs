//! Stream direction of a port.
//!
//! Several port fields (gain value count, I/O flags) mean different things
//! for capture and playback. The direction is not stored anywhere; it
//! follows from the port role and type.

use audio_legacy as legacy;
use media_aidl as aidl;

use crate::error::{ConversionError, ConversionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Input,
    Output,
}

impl Direction {
    /// Direction of a wire port.
    ///
    /// A device acting as a source feeds the input side; a mix acting as a
    /// source feeds the output side. Any other role or type has no direction.
    pub fn of_aidl(role: aidl::AudioPortRole, type_: aidl::AudioPortType) -> ConversionResult<Self> {
        use aidl::{AudioPortRole as Role, AudioPortType as Type};
        match (type_, role) {
            (Type::DEVICE, Role::SOURCE) => Ok(Direction::Input),
            (Type::DEVICE, Role::SINK) => Ok(Direction::Output),
            (Type::MIX, Role::SOURCE) => Ok(Direction::Output),
            (Type::MIX, Role::SINK) => Ok(Direction::Input),
            _ => Err(ConversionError::BadValue),
        }
    }

    /// Direction of a native port; same rules as [`Direction::of_aidl`].
    pub fn of_legacy(role: legacy::AudioPortRole, type_: legacy::AudioPortType) -> ConversionResult<Self> {
        match (type_, role) {
            (legacy::AUDIO_PORT_TYPE_DEVICE, legacy::AUDIO_PORT_ROLE_SOURCE) => Ok(Direction::Input),
            (legacy::AUDIO_PORT_TYPE_DEVICE, legacy::AUDIO_PORT_ROLE_SINK) => Ok(Direction::Output),
            (legacy::AUDIO_PORT_TYPE_MIX, legacy::AUDIO_PORT_ROLE_SOURCE) => Ok(Direction::Output),
            (legacy::AUDIO_PORT_TYPE_MIX, legacy::AUDIO_PORT_ROLE_SINK) => Ok(Direction::Input),
            _ => Err(ConversionError::BadValue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aidl::{AudioPortRole as Role, AudioPortType as Type};

    #[test]
    fn device_and_mix_have_opposite_directions() {
        assert_eq!(Direction::of_aidl(Role::SOURCE, Type::DEVICE), Ok(Direction::Input));
        assert_eq!(Direction::of_aidl(Role::SINK, Type::DEVICE), Ok(Direction::Output));
        assert_eq!(Direction::of_aidl(Role::SOURCE, Type::MIX), Ok(Direction::Output));
        assert_eq!(Direction::of_aidl(Role::SINK, Type::MIX), Ok(Direction::Input));
    }

    #[test]
    fn other_combinations_have_no_direction() {
        for role in [Role::NONE, Role::SOURCE, Role::SINK, Role(7)] {
            for type_ in [Type::NONE, Type::SESSION, Type(9)] {
                assert_eq!(Direction::of_aidl(role, type_), Err(ConversionError::BadValue));
            }
        }
        assert_eq!(Direction::of_aidl(Role::NONE, Type::MIX), Err(ConversionError::BadValue));
    }

    #[test]
    fn legacy_rules_match_wire_rules() {
        let roles = [
            (Role::NONE, legacy::AUDIO_PORT_ROLE_NONE),
            (Role::SOURCE, legacy::AUDIO_PORT_ROLE_SOURCE),
            (Role::SINK, legacy::AUDIO_PORT_ROLE_SINK),
        ];
        let types = [
            (Type::NONE, legacy::AUDIO_PORT_TYPE_NONE),
            (Type::DEVICE, legacy::AUDIO_PORT_TYPE_DEVICE),
            (Type::MIX, legacy::AUDIO_PORT_TYPE_MIX),
            (Type::SESSION, legacy::AUDIO_PORT_TYPE_SESSION),
        ];
        for (aidl_role, legacy_role) in roles {
            for (aidl_type, legacy_type) in types {
                assert_eq!(
                    Direction::of_aidl(aidl_role, aidl_type),
                    Direction::of_legacy(legacy_role, legacy_type)
                );
            }
        }
    }
}
