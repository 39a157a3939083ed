//! Configuration constants for the UBMP4 loop programs

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Length of one PWM sub-step in microseconds
pub const PWM_STEP_US: u16 = 20;

/// Starting value of the descending PWM counter
pub const PWM_TOP: u8 = 255;

/// LED brightness at power-up
pub const INITIAL_BRIGHTNESS: u8 = 127;

/// Tone half-period at power-up, in microseconds
pub const INITIAL_TONE_PERIOD: u16 = 460;

/// Beeper toggles per tone burst
pub const TONE_CYCLES: u16 = 50;

/// Length of one idle tick in milliseconds
pub const IDLE_TICK_MS: u16 = 50;

/// Idle ticks before powering down (2400 * 50ms = 2 minutes)
pub const IDLE_TIMEOUT_TICKS: u16 = 2400;

/// Total number of pattern steps
pub const PATTERN_LENGTH: usize = 42;

/// Settings for the brightness program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoopConfig {
    pub initial_brightness: u8,
    pub initial_tone_period: u16,
    pub step_us: u16,
    /// Run the pitch buttons and a tone burst after every sweep.
    pub tone_enabled: bool,
    pub tone_cycles: u16,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            initial_brightness: INITIAL_BRIGHTNESS,
            initial_tone_period: INITIAL_TONE_PERIOD,
            step_us: PWM_STEP_US,
            tone_enabled: false,
            tone_cycles: TONE_CYCLES,
        }
    }
}

impl LoopConfig {
    /// Brightness program with the tone activity switched on.
    pub fn with_tone() -> Self {
        Self {
            tone_enabled: true,
            ..Self::default()
        }
    }
}

/// Settings for the note test program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoteConfig {
    pub idle_tick_ms: u16,
    /// Zero disables the idle power-down.
    pub idle_timeout_ticks: u16,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            idle_tick_ms: IDLE_TICK_MS,
            idle_timeout_ticks: IDLE_TIMEOUT_TICKS,
        }
    }
}
