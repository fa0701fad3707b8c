//! VNH3SP30 H-bridge DC motor driver
//!
//! The chip is commanded through three lines and reports through two:
//!
//! | INA | INB | PWM  | Motor                              |
//! |-----|-----|------|------------------------------------|
//! | H   | L   | duty | Forward at duty                    |
//! | L   | H   | duty | Reverse at duty                    |
//! | L   | L   | duty | Brake to GND, strength set by duty |
//! | any | any | 0    | Coast                              |
//!
//! DIAG is pulled low by the chip on a protection fault and CS carries a
//! voltage proportional to motor current.
//!
//! # Usage
//!
//! ```ignore
//! let mut motor = Vnh3sp30::new(io);
//! motor.begin(PinMap::new(5, 6, 7).with_fault(8));
//!
//! if motor.set_speed(-200).is_fault() {
//!     motor.brake(400);
//! }
//! ```
//!
//! Speeds are signed in `-400..=400` by default. Commanding 0 keeps the
//! direction lines where they were, so the motor coasts to a stop. Swapping
//! INA/INB at zero duty would brake instead.

use vnh3sp30_core::config::{ConfigError, DutyScale, MotorConfig, PinMap};
use vnh3sp30_core::traits::{Direction, DriverStatus, MotorDriver};
use vnh3sp30_hal::{Level, LineId, LineMode, PlatformIo};

/// VNH3SP30 driver bound to a platform I/O handle
pub struct Vnh3sp30<IO> {
    io: IO,
    pins: PinMap,
    scale: DutyScale,
    /// Last commanded direction, kept across zero-speed commands
    direction: Direction,
    /// Signed commanded speed, 0 while braking
    speed: i32,
    braking: bool,
}

impl<IO: PlatformIo> Vnh3sp30<IO> {
    /// Create a driver with the default 400 → 255 duty scale
    ///
    /// No line is touched until [`begin`](Self::begin) binds the pin map.
    pub fn new(io: IO) -> Self {
        Self::with_scale(io, DutyScale::default())
    }

    /// Create a driver for a PWM output with a different resolution
    pub fn with_scale(io: IO, scale: DutyScale) -> Self {
        Self {
            io,
            pins: PinMap::unwired(),
            scale,
            direction: Direction::Forward,
            speed: 0,
            braking: false,
        }
    }

    /// Validate a stored configuration, create the driver and bind its lines
    pub fn from_config(io: IO, config: &MotorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut driver = Self::with_scale(io, config.scale);
        driver.begin(config.pins);
        Ok(driver)
    }

    /// Bind the driver roles to board lines and stop the motor
    ///
    /// Outputs are configured as push-pull, the fault line as input with
    /// pull-up and the current-sense line as a plain input. The motor is
    /// then left coasting in the forward direction.
    pub fn begin(&mut self, pins: PinMap) {
        self.pins = pins;

        for line in [pins.pwm, pins.forward_select, pins.reverse_select]
            .into_iter()
            .flatten()
        {
            self.io.configure_line_mode(line, LineMode::Output);
        }
        if let Some(line) = pins.fault {
            self.io.configure_line_mode(line, LineMode::InputPullUp);
        }
        if let Some(line) = pins.current_sense {
            self.io.configure_line_mode(line, LineMode::Input);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "vnh3sp30: pwm={} ina={} inb={} diag={} cs={}",
            pins.pwm,
            pins.forward_select,
            pins.reverse_select,
            pins.fault,
            pins.current_sense
        );

        self.direction = Direction::Forward;
        self.braking = false;
        self.set_speed(0);
    }

    /// Bound line map
    pub fn pins(&self) -> &PinMap {
        &self.pins
    }

    /// Active speed to duty conversion
    pub fn scale(&self) -> DutyScale {
        self.scale
    }

    /// Check if the last command was a brake
    pub fn is_braking(&self) -> bool {
        self.braking
    }

    /// Borrow the platform I/O handle
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Release the platform I/O handle
    pub fn release(self) -> IO {
        self.io
    }

    fn write_level(&mut self, line: Option<LineId>, level: Level) {
        if let Some(line) = line {
            self.io.write_digital(line, level);
        }
    }

    fn write_duty(&mut self, duty: u16) {
        if let Some(line) = self.pins.pwm {
            self.io.write_pwm(line, duty);
        }
    }

    /// Drive INA/INB for a run direction
    fn select_direction(&mut self, direction: Direction) {
        let (ina, inb) = match direction {
            Direction::Forward => (Level::High, Level::Low),
            Direction::Reverse => (Level::Low, Level::High),
        };
        self.write_level(self.pins.forward_select, ina);
        self.write_level(self.pins.reverse_select, inb);
    }
}

impl<IO: PlatformIo> MotorDriver for Vnh3sp30<IO> {
    fn set_speed(&mut self, speed: i32) -> DriverStatus {
        // Zero keeps the previous direction: reversing INA/INB here would
        // make the chip brake instead of letting the motor free-run.
        if speed > 0 {
            self.direction = Direction::Forward;
        } else if speed < 0 {
            self.direction = Direction::Reverse;
        }
        self.select_direction(self.direction);

        let magnitude = self.scale.clamp(speed.unsigned_abs());
        self.speed = match self.direction {
            Direction::Forward => magnitude as i32,
            Direction::Reverse => -(magnitude as i32),
        };
        self.braking = false;

        let duty = self.scale.duty(magnitude);
        self.write_duty(duty);

        #[cfg(feature = "defmt")]
        defmt::trace!("vnh3sp30: speed={} duty={}", self.speed, duty);

        self.status()
    }

    fn brake(&mut self, power: i32) -> DriverStatus {
        let magnitude = self.scale.clamp(power.max(0) as u32);

        self.write_level(self.pins.forward_select, Level::Low);
        self.write_level(self.pins.reverse_select, Level::Low);

        let duty = self.scale.duty(magnitude);
        self.write_duty(duty);
        self.speed = 0;
        self.braking = true;

        #[cfg(feature = "defmt")]
        defmt::trace!("vnh3sp30: brake duty={}", duty);

        self.status()
    }

    fn status(&mut self) -> DriverStatus {
        let Some(line) = self.pins.fault else {
            return DriverStatus::Ok;
        };

        let status = DriverStatus::from_fault_level(self.io.read_digital(line));

        #[cfg(feature = "defmt")]
        if status.is_fault() {
            defmt::warn!("vnh3sp30: chip fault reported on {}", line);
        }

        status
    }

    fn motor_current(&mut self) -> u16 {
        match self.pins.current_sense {
            Some(line) => self.io.read_analog(line),
            None => 0,
        }
    }

    fn speed(&self) -> i32 {
        self.speed
    }

    fn direction(&self) -> Direction {
        self.direction
    }
}
