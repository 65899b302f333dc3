//! Startup configuration
//!
//! Fixed at build time. Nothing here is user-configurable or persisted; the
//! values describe the serial line, the analog input and the output port
//! as the firmware brings them up at boot.

pub use potconsole_hal::uart::{DataBits, Parity, StopBits, UartConfig};

/// Analog input configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcConfig {
    /// Input channel, referenced to the supply rails
    pub channel: u8,
    /// Converter resolution the board must provide; results are
    /// left-justified to 8 bits
    pub resolution_bits: u8,
    /// Settling time after enabling the converter (µs)
    pub acquisition_time_us: u32,
}

/// Output port configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortConfig {
    /// Value driven from boot until the first forwarded byte
    pub reset_value: u8,
}

/// Complete startup configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StartupConfig {
    pub uart: UartConfig,
    /// Largest acceptable deviation of the generated baud rate (ppm)
    pub baud_tolerance_ppm: u32,
    pub adc: AdcConfig,
    pub port: PortConfig,
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Commands and forwarded values are whole bytes: 8 data bits only
    UnsupportedFrame,
    /// Board converter resolution differs from the configured one
    ResolutionMismatch { native: u8 },
    /// Baud rate generator cannot get close enough to the target
    BaudOutOfTolerance { error_ppm: u32 },
}

impl StartupConfig {
    /// 9600 8N1 within 0.16%, channel 0 of a 12-bit converter, port at 0
    pub const DEFAULT: Self = Self {
        uart: UartConfig::CONSOLE,
        baud_tolerance_ppm: 1_600,
        adc: AdcConfig {
            channel: 0,
            resolution_bits: 12,
            acquisition_time_us: 40,
        },
        port: PortConfig { reset_value: 0 },
    };

    /// Check the configuration against the board before any peripheral is
    /// programmed
    ///
    /// `converter_bits` is the native resolution of the board's ADC.
    pub fn validate(&self, converter_bits: u8) -> Result<(), ConfigError> {
        if self.uart.data_bits != DataBits::Eight {
            return Err(ConfigError::UnsupportedFrame);
        }

        if self.adc.resolution_bits != converter_bits {
            return Err(ConfigError::ResolutionMismatch {
                native: converter_bits,
            });
        }

        Ok(())
    }

    /// Check the baud rate the UART divisors actually produce
    pub fn check_baud(&self, achieved_baud: u32) -> Result<(), ConfigError> {
        let error_ppm = self.uart.baud_error_ppm(achieved_baud);
        if error_ppm > self.baud_tolerance_ppm {
            return Err(ConfigError::BaudOutOfTolerance { error_ppm });
        }
        Ok(())
    }

    /// Upper bound of a single transmit busy-wait (µs)
    pub const fn transmit_bound_us(&self) -> u32 {
        self.uart.frame_time_us()
    }
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
