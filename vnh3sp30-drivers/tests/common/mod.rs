//! Shared mock board I/O for integration tests

#![allow(dead_code)]

use vnh3sp30_hal::{AnalogInput, DigitalIo, Level, LineId, LineMode, PwmOutput};

/// Every I/O call the driver made, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Mode(LineId, LineMode),
    Write(LineId, Level),
    Read(LineId),
    Pwm(LineId, u16),
    Analog(LineId),
}

/// Mock board recording calls and serving fixed input values
pub struct MockBoard {
    pub calls: Vec<Call>,
    pub fault_level: Level,
    pub analog: u16,
}

impl MockBoard {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            fault_level: Level::High,
            analog: 0,
        }
    }

    /// Last level written to `pin`
    pub fn level(&self, pin: u8) -> Option<Level> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Write(line, level) if line.pin() == pin => Some(*level),
            _ => None,
        })
    }

    /// Last duty written to `pin`
    pub fn duty(&self, pin: u8) -> Option<u16> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Pwm(line, duty) if line.pin() == pin => Some(*duty),
            _ => None,
        })
    }

    /// Every line touched by any call
    pub fn touched(&self) -> impl Iterator<Item = LineId> + '_ {
        self.calls.iter().map(|call| match *call {
            Call::Mode(line, _)
            | Call::Write(line, _)
            | Call::Read(line)
            | Call::Pwm(line, _)
            | Call::Analog(line) => line,
        })
    }
}

impl DigitalIo for MockBoard {
    fn configure_line_mode(&mut self, line: LineId, mode: LineMode) {
        self.calls.push(Call::Mode(line, mode));
    }

    fn write_digital(&mut self, line: LineId, level: Level) {
        self.calls.push(Call::Write(line, level));
    }

    fn read_digital(&mut self, line: LineId) -> Level {
        self.calls.push(Call::Read(line));
        self.fault_level
    }
}

impl PwmOutput for MockBoard {
    fn write_pwm(&mut self, line: LineId, duty: u16) {
        self.calls.push(Call::Pwm(line, duty));
    }
}

impl AnalogInput for MockBoard {
    fn read_analog(&mut self, line: LineId) -> u16 {
        self.calls.push(Call::Analog(line));
        self.analog
    }
}
