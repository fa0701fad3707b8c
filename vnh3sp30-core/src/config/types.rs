//! Motor configuration and persistence
//!
//! A [`MotorConfig`] bundles everything needed to bring one motor up.
//! With the `serde` feature it can be stored in flash as postcard binary
//! data, prefixed with a magic number and version byte.

use heapless::String;
use vnh3sp30_hal::LineId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::hardware::{DutyScale, PinMap};

/// Maximum label length
pub const MAX_LABEL_LEN: usize = 16;

/// Magic number identifying stored motor configuration
pub const CONFIG_MAGIC: u32 = 0x564E_4833; // "VNH3"

/// Current stored configuration version
pub const CONFIG_VERSION: u8 = 1;

/// Errors that can occur while building or loading a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Speed range of a duty scale is empty
    ZeroInputRange,
    /// Duty range of a duty scale is empty
    ZeroOutputRange,
    /// PWM resolution outside 1-16 bits
    UnsupportedResolution(u8),
    /// Same line bound to two roles
    LineConflict(LineId),
    /// Label exceeds [`MAX_LABEL_LEN`]
    LabelTooLong,
    /// Buffer too small or encoding failed
    Serialize,
    /// Stored bytes could not be decoded
    Deserialize,
    /// Stored data has the wrong magic number or version
    StaleData,
}

/// Complete configuration for one motor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotorConfig {
    /// Motor name (e.g., "left", "lift")
    pub label: String<MAX_LABEL_LEN>,
    /// Line assignment
    pub pins: PinMap,
    /// Speed to duty conversion
    pub scale: DutyScale,
}

impl MotorConfig {
    /// Create a validated configuration
    pub fn new(label: &str, pins: PinMap, scale: DutyScale) -> Result<Self, ConfigError> {
        let mut name = String::new();
        name.push_str(label).map_err(|_| ConfigError::LabelTooLong)?;

        let config = Self {
            label: name,
            pins,
            scale,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the pin map and duty scale
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pins.validate()?;
        self.scale.validate()
    }

    /// Encode into `buf`, returning the written prefix
    #[cfg(feature = "serde")]
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(&(CONFIG_MAGIC, CONFIG_VERSION, self), buf)
            .map_err(|_| ConfigError::Serialize)
    }

    /// Decode and validate a stored configuration
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let (magic, version, config): (u32, u8, MotorConfig) =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

        if magic != CONFIG_MAGIC || version != CONFIG_VERSION {
            return Err(ConfigError::StaleData);
        }

        // Stored data bypasses the constructors
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = MotorConfig::new("left", PinMap::new(5, 6, 7), DutyScale::default()).unwrap();
        assert_eq!(config.label.as_str(), "left");
        assert_eq!(config.pins.pwm, Some(LineId(5)));
    }

    #[test]
    fn test_label_too_long() {
        let result = MotorConfig::new(
            "a-very-long-motor-label",
            PinMap::new(5, 6, 7),
            DutyScale::default(),
        );
        assert_eq!(result, Err(ConfigError::LabelTooLong));
    }

    #[test]
    fn test_new_rejects_conflicting_pins() {
        let result = MotorConfig::new("lift", PinMap::new(5, 5, 7), DutyScale::default());
        assert_eq!(result, Err(ConfigError::LineConflict(LineId(5))));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(MotorConfig::default().validate().is_ok());
    }

    #[cfg(feature = "serde")]
    mod persistence {
        use super::*;

        #[test]
        fn test_store_and_load() {
            let pins = PinMap::new(5, 6, 7).with_fault(8).with_current_sense(26);
            let scale = DutyScale::from_resolution_bits(10).unwrap();
            let config = MotorConfig::new("lift", pins, scale).unwrap();

            let mut buf = [0u8; 64];
            let len = config.to_slice(&mut buf).unwrap().len();

            let loaded = MotorConfig::from_bytes(&buf[..len]).unwrap();
            assert_eq!(loaded, config);
        }

        #[test]
        fn test_buffer_too_small() {
            let config = MotorConfig::new("lift", PinMap::new(5, 6, 7), DutyScale::default())
                .unwrap();
            let mut buf = [0u8; 4];
            assert_eq!(config.to_slice(&mut buf), Err(ConfigError::Serialize));
        }

        #[test]
        fn test_wrong_magic_is_stale() {
            let config = MotorConfig::default();
            let mut buf = [0u8; 64];
            let len = postcard::to_slice(&(0xDEAD_BEEFu32, CONFIG_VERSION, &config), &mut buf)
                .unwrap()
                .len();

            assert_eq!(
                MotorConfig::from_bytes(&buf[..len]),
                Err(ConfigError::StaleData)
            );
        }

        #[test]
        fn test_garbage_is_rejected() {
            assert_eq!(MotorConfig::from_bytes(&[]), Err(ConfigError::Deserialize));
        }

        #[test]
        fn test_stored_conflict_is_rejected() {
            let config = MotorConfig {
                pins: PinMap::new(3, 3, 4),
                ..MotorConfig::default()
            };
            let mut buf = [0u8; 64];
            let len = config.to_slice(&mut buf).unwrap().len();

            assert_eq!(
                MotorConfig::from_bytes(&buf[..len]),
                Err(ConfigError::LineConflict(LineId(3)))
            );
        }
    }
}
