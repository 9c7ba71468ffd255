use chrono::{Local, Timelike};
use std::{collections::VecDeque, fmt, time::Duration};

pub const TYPING_INTERVAL: Duration = Duration::from_millis(80);
pub const KEY_LIFT_DURATION: Duration = Duration::from_millis(200);
pub const SPIN_DURATION: Duration = Duration::from_millis(2000);

/// ↑ ↑ ↓ ↓ ← → ← → B A
pub const KONAMI_CODE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

pub const EASTER_EGG_MESSAGE: &str = "🎮 Congratulations! You found the secret code. \
     Pratik loves attention to detail - just like you!";

/// Reveals a piece of text one character per tick.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
    started: bool,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
            started: false,
        }
    }

    /// Marks the effect as started; false if it already ran.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.revealed = 0;
        true
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    /// Reveals one more character. Returns false once the text is complete.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.revealed += 1;
        true
    }

    pub fn visible(&self) -> String {
        if !self.started {
            return self.chars.iter().collect();
        }
        self.chars[..self.revealed].iter().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    pub fn for_hour(hour: u32) -> Self {
        if hour < 12 {
            Self::Morning
        } else if hour < 17 {
            Self::Afternoon
        } else {
            Self::Evening
        }
    }

    /// Greeting for the visitor's local clock.
    pub fn now() -> Self {
        Self::for_hour(Local::now().hour())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "Good morning!",
            Self::Afternoon => "Good afternoon!",
            Self::Evening => "Good evening!",
        }
    }

    pub fn prefix(&self, text: &str) -> String {
        format!("{} {}", self.as_str(), text)
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys that activate a focused card.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Rolling window over the last key codes, matched against a fixed sequence.
#[derive(Debug, Clone)]
pub struct SequenceDetector {
    target: &'static [u32],
    buffer: VecDeque<u32>,
}

impl SequenceDetector {
    pub fn new(target: &'static [u32]) -> Self {
        Self {
            target,
            buffer: VecDeque::with_capacity(target.len()),
        }
    }

    pub fn konami() -> Self {
        Self::new(&KONAMI_CODE)
    }

    /// Records a key code. Returns true, and clears the window, on a full match.
    pub fn push(&mut self, code: u32) -> bool {
        self.buffer.push_back(code);
        if self.buffer.len() > self.target.len() {
            self.buffer.pop_front();
        }
        if self.buffer.iter().eq(self.target.iter()) {
            self.buffer.clear();
            true
        } else {
            false
        }
    }

    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

impl Default for SequenceDetector {
    fn default() -> Self {
        Self::konami()
    }
}

/// Where an uncaught script error was raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

/// One-line report for an uncaught error, e.g. `boom (app.js:12:4)`.
pub fn describe_error(message: &str, location: &ErrorLocation) -> String {
    let message = if message.is_empty() {
        "unknown error"
    } else {
        message
    };
    if location.file.is_empty() {
        message.to_string()
    } else {
        format!(
            "{message} ({}:{}:{})",
            location.file, location.line, location.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_error() {
        let location = ErrorLocation {
            file: "/pkg/portfolio-site.js".into(),
            line: 12,
            column: 4,
        };
        assert_eq!(
            describe_error("Uncaught TypeError: x is undefined", &location),
            "Uncaught TypeError: x is undefined (/pkg/portfolio-site.js:12:4)"
        );
        // cross-origin script errors arrive without a message or location
        assert_eq!(
            describe_error("", &ErrorLocation::default()),
            "unknown error"
        );
    }

    #[test]
    fn test_typewriter_reveals_one_char_per_tick() {
        let mut t = Typewriter::new("Rust");
        assert_eq!(t.visible(), "Rust");
        assert!(t.start());
        assert_eq!(t.visible(), "");
        let mut frames = vec![];
        while t.tick() {
            frames.push(t.visible());
        }
        assert_eq!(frames, vec!["R", "Ru", "Rus", "Rust"]);
        assert!(t.is_done());
        assert!(!t.tick());
        assert_eq!(t.visible(), "Rust");
    }

    #[test]
    fn test_typewriter_runs_once() {
        let mut t = Typewriter::new("ab");
        assert!(t.start());
        t.tick();
        t.tick();
        assert!(!t.start());
        assert_eq!(t.visible(), "ab");
    }

    #[test]
    fn test_typewriter_multibyte() {
        let mut t = Typewriter::new("héllo 🚀");
        t.start();
        for _ in 0..2 {
            t.tick();
        }
        assert_eq!(t.visible(), "hé");
    }

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(Greeting::for_hour(0), Greeting::Morning);
        assert_eq!(Greeting::for_hour(11), Greeting::Morning);
        assert_eq!(Greeting::for_hour(12), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(16), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(17), Greeting::Evening);
        assert_eq!(Greeting::for_hour(23), Greeting::Evening);
        assert_eq!(
            Greeting::Morning.prefix("I build things."),
            "Good morning! I build things."
        );
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("a"));
    }

    #[test]
    fn test_konami_triggers_once() {
        let mut d = SequenceDetector::konami();
        let hits = KONAMI_CODE.iter().filter(|&&c| d.push(c)).count();
        assert_eq!(hits, 1);
        assert_eq!(d.buffered(), 0);
    }

    #[test]
    fn test_konami_after_noise() {
        let mut d = SequenceDetector::konami();
        for c in [65, 38, 13, 40] {
            assert!(!d.push(c));
        }
        let last = KONAMI_CODE.iter().map(|&c| d.push(c)).collect::<Vec<_>>();
        assert_eq!(last.iter().filter(|&&hit| hit).count(), 1);
        assert!(last[9]);
    }

    #[test]
    fn test_konami_off_by_one_never_triggers() {
        for i in 0..KONAMI_CODE.len() {
            let mut window = KONAMI_CODE;
            window[i] = if window[i] == 65 { 66 } else { 65 };
            let mut d = SequenceDetector::konami();
            assert!(
                !window.iter().any(|&c| d.push(c)),
                "window differing at {i} should not trigger"
            );
            assert_eq!(d.buffered(), KONAMI_CODE.len());
        }
    }
}
