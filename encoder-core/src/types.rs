//! Core Types für den Drehgeber
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// GPIO-Pin-Nummer (BCM-Nummerierung)
pub type PinId = u8;

/// Pull-Widerstand für einen Eingang, wird einmalig beim Attach gesetzt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    Up,
    Down,
}

/// Momentaufnahme der beiden Quadratur-Leitungen A und B
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    pub a: bool,
    pub b: bool,
}

impl LineState {
    pub const fn new(a: bool, b: bool) -> Self {
        Self { a, b }
    }
}

/// 2-Bit Gray-Code einer Quadratur-Phase (0..=3)
///
/// Berechnet als `(A xor B) | (B << 1)`. Aufsteigende Codes (0 → 1 → 2 → 3 → 0)
/// entsprechen einer Drehrichtung, absteigende der anderen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrayCode(u8);

impl GrayCode {
    /// Baut einen Gray-Code aus einem Rohwert; nur die unteren zwei Bits zählen.
    pub const fn new(raw: u8) -> Self {
        Self(raw & 0b11)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Leitungszustand, der genau diesen Code erzeugt
    pub const fn line_state(self) -> LineState {
        match self.0 {
            0 => LineState::new(false, false),
            1 => LineState::new(true, false),
            2 => LineState::new(true, true),
            _ => LineState::new(false, true),
        }
    }
}

impl From<LineState> for GrayCode {
    fn from(line: LineState) -> Self {
        let a = line.a as u8;
        let b = line.b as u8;
        Self((a ^ b) | (b << 1))
    }
}

/// Flanken des Tasters aus einer einzelnen Abtastung
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchEdges {
    /// Taster wurde gedrückt (low → high)
    pub up: bool,
    /// Taster wurde losgelassen (high → low)
    pub down: bool,
}

/// Ergebnis eines kombinierten Read-and-Clear aller drei Events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventSnapshot {
    pub delta: i32,
    pub up_event: bool,
    pub down_event: bool,
}

impl EventSnapshot {
    pub fn is_empty(&self) -> bool {
        self.delta == 0 && !self.up_event && !self.down_event
    }
}

/// Farbkanal der RGB-LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl ColorChannel {
    pub const ALL: [ColorChannel; 3] = [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            ColorChannel::Red => "red",
            ColorChannel::Green => "green",
            ColorChannel::Blue => "blue",
        }
    }

    /// Nächster Kanal in der Reihenfolge Rot → Grün → Blau → Rot
    pub const fn next(self) -> Self {
        match self {
            ColorChannel::Red => ColorChannel::Green,
            ColorChannel::Green => ColorChannel::Blue,
            ColorChannel::Blue => ColorChannel::Red,
        }
    }
}

impl TryFrom<u8> for ColorChannel {
    type Error = ();

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(ColorChannel::Red),
            1 => Ok(ColorChannel::Green),
            2 => Ok(ColorChannel::Blue),
            _ => Err(()),
        }
    }
}

/// Helligkeit eines Kanals, 0 = aus, 100 = voll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Brightness(u8);

impl Brightness {
    pub const MAX: u8 = 100;

    /// Prüft den Wertebereich; Werte über 100 ergeben `None`, kein Clamping.
    pub const fn new(value: u8) -> Option<Self> {
        if value > Self::MAX {
            return None;
        }
        Some(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Duty-Cycle für Common-Anode-Verdrahtung: 0 % Duty = LED voll an
    pub const fn duty_cycle(self) -> u8 {
        Self::MAX - self.0
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LineState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "LineState {{ a: {}, b: {} }}", self.a, self.b)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for GrayCode {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "GrayCode({})", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EventSnapshot {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "EventSnapshot {{ delta: {}, up: {}, down: {} }}",
            self.delta,
            self.up_event,
            self.down_event
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ColorChannel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_code_from_lines() {
        assert_eq!(GrayCode::from(LineState::new(false, false)).value(), 0);
        assert_eq!(GrayCode::from(LineState::new(true, false)).value(), 1);
        assert_eq!(GrayCode::from(LineState::new(true, true)).value(), 2);
        assert_eq!(GrayCode::from(LineState::new(false, true)).value(), 3);
    }

    #[test]
    fn test_gray_code_line_state_matches() {
        for raw in 0..4 {
            let code = GrayCode::new(raw);
            assert_eq!(GrayCode::from(code.line_state()), code);
        }
    }

    #[test]
    fn test_color_channel_try_from() {
        assert_eq!(ColorChannel::try_from(0), Ok(ColorChannel::Red));
        assert_eq!(ColorChannel::try_from(2), Ok(ColorChannel::Blue));
        assert!(ColorChannel::try_from(3).is_err());
    }

    #[test]
    fn test_color_channel_next_wraps() {
        assert_eq!(ColorChannel::Blue.next(), ColorChannel::Red);
    }

    #[test]
    fn test_brightness_inverts_duty() {
        let b = Brightness::new(30).unwrap();
        assert_eq!(b.duty_cycle(), 70);
        assert_eq!(Brightness::new(0).unwrap().duty_cycle(), 100);
    }

    #[test]
    fn test_brightness_rejects_out_of_range() {
        assert_eq!(Brightness::new(Brightness::MAX).map(Brightness::value), Some(100));
        assert_eq!(Brightness::new(150), None);
    }
}
